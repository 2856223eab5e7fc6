use std::num::NonZeroU32;

pub(crate) fn some<T>(some: Option<T>) -> T {
    if let Some(value) = some {
        value
    } else {
        unreachable()
    }
}

pub(crate) fn non_zero(nz: u32) -> NonZeroU32 {
    some(NonZeroU32::new(nz))
}

#[cold]
pub(crate) fn unreachable() -> ! {
    unreachable!("invariant violated")
}
