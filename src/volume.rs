use crate::tables::CellCode;
use glam::IVec3;
use thiserror::Error;

/// A scalar sample type the extractor can threshold and interpolate.
///
/// Covers `u8` and `u16` volumes (and `f32` for synthetic data).
pub trait Sample: Copy + PartialOrd + Into<f32> {}

impl<T> Sample for T where T: Copy + PartialOrd + Into<f32> {}

/// Largest number of voxels a [`Volume`] may hold. Grid coordinates are `i32`.
pub const MAX_VOXELS: usize = i32::MAX as usize;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    #[error("volume dimension {axis} is {dim}, but must be at least 2")]
    DimensionTooSmall { axis: usize, dim: u32 },
    #[error("volume has {actual} samples, but its dimensions require {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("volume has {count} voxels, which exceeds i32::MAX")]
    TooManyVoxels { count: usize },
}

/// Borrowed dense sample grid, linearized as `x + dim_x * (y + dim_y * z)`.
#[derive(Clone, Copy, Debug)]
pub struct Volume<'a, T> {
    data: &'a [T],
    dims: IVec3,
}

impl<'a, T: Sample> Volume<'a, T> {
    /// Checks the extractor's preconditions before wrapping `data`.
    pub fn new(data: &'a [T], dims: [u32; 3]) -> Result<Self, VolumeError> {
        for (axis, &dim) in dims.iter().enumerate() {
            if dim < 2 {
                return Err(VolumeError::DimensionTooSmall { axis, dim });
            }
        }

        let count = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
            .unwrap_or(usize::MAX);
        if count > MAX_VOXELS {
            return Err(VolumeError::TooManyVoxels { count });
        }
        if data.len() != count {
            return Err(VolumeError::SizeMismatch {
                expected: count,
                actual: data.len(),
            });
        }

        Ok(Self::new_unchecked(
            data,
            IVec3::new(dims[0] as i32, dims[1] as i32, dims[2] as i32),
        ))
    }

    /// Wraps `data` without validation. The caller guarantees every dimension
    /// is at least 2 and `data.len()` is their product.
    pub fn new_unchecked(data: &'a [T], dims: IVec3) -> Self {
        Self { data, dims }
    }

    #[inline]
    pub fn dims(&self) -> IVec3 {
        self.dims
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn linear_index(&self, p: IVec3) -> usize {
        p.x as usize + self.dims.x as usize * (p.y as usize + self.dims.y as usize * p.z as usize)
    }

    #[inline]
    pub fn get(&self, p: IVec3) -> T {
        self.data[self.linear_index(p)]
    }

    /// True if `cell` is the lower corner of a cell inside the grid.
    #[inline]
    pub fn contains_cell(&self, cell: IVec3) -> bool {
        cell.cmpge(IVec3::ZERO).all() && cell.cmplt(self.dims - IVec3::ONE).all()
    }

    /// Samples at the 8 corners of `cell`, in corner-code order.
    #[inline]
    pub fn cell_samples(&self, cell: IVec3) -> [T; 8] {
        [0, 1, 2, 3, 4, 5, 6, 7].map(|corner| self.get(cell + corner_offset(corner)))
    }

    /// Bit `i` of the result is set iff corner `i` of `cell` is at or above
    /// `iso`.
    ///
    /// `cell` must satisfy [`Self::contains_cell`].
    #[inline]
    pub fn cell_code(&self, cell: IVec3, iso: T) -> CellCode {
        cell_code(&self.cell_samples(cell), iso)
    }
}

/// Offset of a corner from its cell's lower corner.
#[inline]
pub fn corner_offset(corner: u8) -> IVec3 {
    IVec3::new(
        (corner & 1) as i32,
        ((corner >> 1) & 1) as i32,
        ((corner >> 2) & 1) as i32,
    )
}

#[inline]
pub fn cell_code<T: Sample>(samples: &[T; 8], iso: T) -> CellCode {
    let mut code = 0;
    for (i, &sample) in samples.iter().enumerate() {
        if sample >= iso {
            code |= 1 << i;
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        let data = [0u8; 8];
        assert_eq!(
            Volume::new(&data, [2, 1, 4]).unwrap_err(),
            VolumeError::DimensionTooSmall { axis: 1, dim: 1 }
        );
        assert_eq!(
            Volume::new(&data, [2, 2, 3]).unwrap_err(),
            VolumeError::SizeMismatch {
                expected: 12,
                actual: 8
            }
        );
        assert!(matches!(
            Volume::new(&data, [u32::MAX, u32::MAX, 2]),
            Err(VolumeError::TooManyVoxels { .. })
        ));
        assert!(Volume::new(&data, [2, 2, 2]).is_ok());
    }

    #[test]
    fn linearization_is_x_fastest() {
        let data: Vec<u16> = (0..24).collect();
        let volume = Volume::new(&data, [2, 3, 4]).unwrap();
        assert_eq!(volume.get(IVec3::new(1, 0, 0)), 1);
        assert_eq!(volume.get(IVec3::new(0, 1, 0)), 2);
        assert_eq!(volume.get(IVec3::new(0, 0, 1)), 6);
        assert_eq!(volume.get(IVec3::new(1, 2, 3)), 23);
    }

    #[test]
    fn corner_bits_follow_morton_order() {
        let mut data = [0u8; 8];
        data[7] = 255;
        let volume = Volume::new(&data, [2, 2, 2]).unwrap();
        assert_eq!(volume.cell_code(IVec3::ZERO, 128), 0b1000_0000);

        data = [0, 0, 0, 0, 0, 0, 0, 0];
        data[1] = 10; // (1, 0, 0)
        data[4] = 10; // (0, 0, 1)
        let volume = Volume::new(&data, [2, 2, 2]).unwrap();
        assert_eq!(volume.cell_code(IVec3::ZERO, 10), 0b0001_0010);
        // The threshold is inclusive.
        assert_eq!(volume.cell_code(IVec3::ZERO, 11), 0);
        assert_eq!(volume.cell_code(IVec3::ZERO, 0), 0xff);
    }

    #[test]
    fn cell_bounds() {
        let data = [0u8; 27];
        let volume = Volume::new(&data, [3, 3, 3]).unwrap();
        assert!(volume.contains_cell(IVec3::new(1, 1, 1)));
        assert!(!volume.contains_cell(IVec3::new(2, 0, 0)));
        assert!(!volume.contains_cell(IVec3::new(0, -1, 0)));
    }
}
