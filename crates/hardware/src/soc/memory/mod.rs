//! Physical System Memory (RAM).
//!
//! This module implements the flat physical memory device. It provides:
//! 1. **Storage:** A zero-initialized 32 MiB byte array mapped at physical address 0.
//! 2. **Byte Order:** Big-endian half-word and word access, so the byte at address `a`
//!    is the `a & 3`-th most significant byte of the word at `a & !3`.
//! 3. **Image Loading:** Copying raw program images (already in big-endian order) into place.

use std::fmt;

use crate::common::constants::RAM_SIZE;
use crate::common::{ExceptionKind, SimError};
use crate::soc::traits::Device;

/// System memory.
pub struct Ram {
    data: Box<[u8]>,
}

impl fmt::Debug for Ram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ram").field("size", &self.data.len()).finish()
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates a zero-filled RAM of `RAM_SIZE` bytes.
    pub fn new() -> Self {
        Self::with_size(RAM_SIZE)
    }

    /// Creates a zero-filled RAM of `size` bytes.
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0; size].into_boxed_slice(),
        }
    }

    /// Returns the capacity in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Copies a raw image into memory at `offset`.
    ///
    /// # Arguments
    ///
    /// * `image` - Image bytes in big-endian word order.
    /// * `offset` - Physical byte offset of the first image byte.
    ///
    /// # Returns
    ///
    /// `Err(SimError::UnalignedImageLength)` when the length is not a multiple of 4,
    /// `Err(SimError::ImageTooLarge)` when the image would run past the end of RAM.
    /// Memory is left untouched on error.
    pub fn load_image(&mut self, image: &[u8], offset: u32) -> Result<(), SimError> {
        if image.len() % 4 != 0 {
            return Err(SimError::UnalignedImageLength { len: image.len() });
        }
        let start = offset as usize;
        let capacity = self.data.len();
        let dest = start
            .checked_add(image.len())
            .and_then(|end| self.data.get_mut(start..end))
            .ok_or(SimError::ImageTooLarge {
                offset,
                len: image.len(),
                capacity,
            })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    #[inline(always)]
    fn bytes<const N: usize>(&self, offset: u32) -> Result<[u8; N], ExceptionKind> {
        let start = offset as usize;
        self.data
            .get(start..start + N)
            .and_then(|s| s.try_into().ok())
            .ok_or(ExceptionKind::BusError)
    }

    #[inline(always)]
    fn bytes_mut<const N: usize>(&mut self, offset: u32) -> Result<&mut [u8], ExceptionKind> {
        let start = offset as usize;
        self.data
            .get_mut(start..start + N)
            .ok_or(ExceptionKind::BusError)
    }
}

impl Device for Ram {
    #[inline(always)]
    fn load8(&mut self, offset: u32) -> Result<u8, ExceptionKind> {
        self.data
            .get(offset as usize)
            .copied()
            .ok_or(ExceptionKind::BusError)
    }

    #[inline(always)]
    fn load16(&mut self, offset: u32) -> Result<u16, ExceptionKind> {
        self.bytes::<2>(offset).map(u16::from_be_bytes)
    }

    #[inline(always)]
    fn load32(&mut self, offset: u32) -> Result<u32, ExceptionKind> {
        self.bytes::<4>(offset).map(u32::from_be_bytes)
    }

    #[inline(always)]
    fn store8(&mut self, offset: u32, val: u8) -> Result<(), ExceptionKind> {
        let slot = self
            .data
            .get_mut(offset as usize)
            .ok_or(ExceptionKind::BusError)?;
        *slot = val;
        Ok(())
    }

    #[inline(always)]
    fn store16(&mut self, offset: u32, val: u16) -> Result<(), ExceptionKind> {
        self.bytes_mut::<2>(offset)?
            .copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    #[inline(always)]
    fn store32(&mut self, offset: u32, val: u32) -> Result<(), ExceptionKind> {
        self.bytes_mut::<4>(offset)?
            .copy_from_slice(&val.to_be_bytes());
        Ok(())
    }
}
