/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each type
/// `$Ty`, making it available within `$imp` under the alias `$Alias`.
///
/// Mostly used to stamp out the same trait impl for every numeric component type.
///
/// ```
/// trait Width {
///     const BYTES: usize;
/// }
///
/// strata_common::item_with! {C: u16, f32 => impl Width for C {
///     const BYTES: usize = std::mem::size_of::<C>();
/// }}
///
/// assert_eq!(<f32 as Width>::BYTES, 4);
/// ```
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Ty:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $Alias = $Ty;
                $imp
            };
        )+
    };
}
