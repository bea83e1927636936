/// Implement [std::ops::Index] for `$Target`, with `$self` and `$i` bound within `$get`.
///
/// ```
/// struct Pair([u8; 2]);
///
/// strata_common::impl_index!(self: Pair => u8, i: bool; &self.0[i as usize]);
///
/// assert_eq!(Pair([3, 4])[true], 4);
/// ```
#[macro_export]
macro_rules! impl_index {
    ($self:ident: $Target:ty => $Output:ty, $i:ident: $Idx:ty; $get:expr) => {
        impl ::std::ops::Index<$Idx> for $Target {
            type Output = $Output;
            #[inline]
            fn index(&$self, $i: $Idx) -> &Self::Output {
                $get
            }
        }
    };
}
