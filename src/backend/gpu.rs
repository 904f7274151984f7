//! # GPU Backend
//!
//! The grid is uploaded once as a `[1, 1, H, W]` tensor together with the
//! rule table. Every generation runs [`GolModel::forward`] on the device and
//! the result becomes the next input, so intermediate generations never
//! touch host memory. The final grid is read back once, in `finish`.
//!
//! The device is picked at compile time:
//! - `cuda` feature: `burn::backend::Cuda`
//! - `wgpu` feature: `burn::backend::Wgpu`
//! - neither: `burn::backend::NdArray`, the same kernel on host tensors

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use burn::prelude::Backend;
use burn::tensor::{Float, Int, Tensor, TensorData};

use crate::config::BackendKind;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::model::{self, GolModel};

use super::Executor;

#[cfg(feature = "cuda")]
pub type DeviceBackend = burn::backend::Cuda;
#[cfg(feature = "cuda")]
pub(super) const DEVICE_NAME: &str = "cuda";

#[cfg(all(feature = "wgpu", not(feature = "cuda")))]
pub type DeviceBackend = burn::backend::Wgpu;
#[cfg(all(feature = "wgpu", not(feature = "cuda")))]
pub(super) const DEVICE_NAME: &str = "wgpu";

#[cfg(not(any(feature = "cuda", feature = "wgpu")))]
pub type DeviceBackend = burn::backend::NdArray;
#[cfg(not(any(feature = "cuda", feature = "wgpu")))]
pub(super) const DEVICE_NAME: &str = "ndarray";

/// Executor that keeps both generations resident on a burn device.
pub struct GpuExecutor<B: Backend> {
    model: GolModel<B>,
    rule: Tensor<B, 1, Int>,
    current: Tensor<B, 4, Float>,
    width: usize,
    height: usize,
    generation: u64,
}

impl<B: Backend> GpuExecutor<B> {
    /// Uploads `grid` and the kernel state to `device`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Platform`] if the device cannot be initialised.
    pub fn new(grid: Grid, device: &B::Device) -> Result<Self> {
        let (width, height) = grid.dimensions();
        let cells: Vec<f32> = grid
            .cells()
            .iter()
            .map(|&alive| if alive { 1.0 } else { 0.0 })
            .collect();

        // Backends report a missing or broken device by panicking during the
        // first allocation.
        let (model, rule, current) = panic::catch_unwind(AssertUnwindSafe(|| {
            let model = GolModel::<B>::neighbour_counter(device);
            let rule = model::rule_tensor::<B>(device);
            let current = Tensor::<B, 1>::from_data(TensorData::new(cells, [width * height]), device)
                .reshape([1, 1, height, width]);
            (model, rule, current)
        }))
        .map_err(|payload| {
            Error::platform(format!("compute device setup failed: {}", panic_message(&*payload)))
        })?;

        tracing::debug!(width, height, "grid uploaded to device");
        Ok(Self {
            model,
            rule,
            current,
            width,
            height,
            generation: 0,
        })
    }
}

impl<B: Backend> Executor for GpuExecutor<B> {
    fn kind(&self) -> BackendKind {
        BackendKind::Gpu
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn advance(&mut self) -> Result<()> {
        // The previous generation's tensor is released here; the backend's
        // allocator hands its memory back for the next output.
        self.current = self.model.forward(self.current.clone(), self.rule.clone());
        self.generation += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Grid> {
        let Self {
            current,
            width,
            height,
            ..
        } = *self;
        let cells = current
            .equal_elem(1.0)
            .into_data()
            .to_vec::<bool>()
            .map_err(|e| Error::Device(format!("cannot read grid back from device: {e:?}")))?;
        Grid::from_cells(width, height, cells)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown cause"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn run_on_device(grid: &Grid, generations: u64) -> Grid {
        let mut executor =
            Box::new(GpuExecutor::<NdArray>::new(grid.clone(), &Default::default()).unwrap());
        for _ in 0..generations {
            executor.advance().unwrap();
        }
        executor.finish().unwrap()
    }

    #[test]
    fn zero_generations_round_trips() {
        let grid = Grid::from_rows(&["x.x.", ".xx.", "...x"], 'x').unwrap();
        assert_eq!(run_on_device(&grid, 0), grid);
    }

    #[test]
    fn lone_centre_cell_dies() {
        let grid = Grid::from_rows(&["...", ".x.", "..."], 'x').unwrap();
        assert_eq!(run_on_device(&grid, 1).population(), 0);
    }

    #[test]
    fn degenerate_strips_match_stepper() {
        for rows in [&["x"][..], &["xxx"], &["x", "x", "."], &["x.", ".x"]] {
            let grid = Grid::from_rows(rows, 'x').unwrap();
            let mut expected = Grid::new(grid.width(), grid.height()).unwrap();
            crate::stepper::step_uniform(&grid, &mut expected);
            assert_eq!(run_on_device(&grid, 1), expected, "{rows:?}");
        }
    }
}
