#![forbid(unsafe_code)]

//! Shorthands for pulling fixed size fields off the front of a byte slice.

#[inline]
pub(crate) fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

#[inline]
pub(crate) fn try_split_off_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  try_split_off_byte_array::<4>(bytes).map(|(a, tail)| (u32::from_be_bytes(a), tail))
}
