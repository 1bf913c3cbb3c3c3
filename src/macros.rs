/// Generate accessors for the global dashboard source stores.
///
/// Usage:
/// `global_sources! {
///     pub fn1 => field1: RecordType1,
///     fn2 => field2: RecordType2,
/// }`
#[macro_export]
macro_rules! global_sources {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> $crate::infrastructure::store::SignalSourceStore<$ty> {
                $crate::global_state::dashboard_sources().$field
            }
        )+
    };
}
