//! # Game of Life Device Kernel
//!
//! The generation update expressed as tensor operations so it runs wherever
//! the burn backend runs (CUDA, wgpu, or ndarray on the host):
//!
//! 1. **Torus padding**: the last row/column is copied in front of the first
//!    and the first behind the last, so an ordinary 3x3 window sees the
//!    wrapped neighbours. A 1-wide axis pads with itself on both sides.
//! 2. **Convolution**: a fixed 3x3 kernel with a zero centre sums the eight
//!    neighbours of every cell at once.
//! 3. **Rule lookup**: `alive * 9 + count` indexes the flattened rule table
//!    held on the device, one gather per cell.

/// 3x3 convolution kernel for counting neighbors.
///
/// ```text
/// [1.0, 1.0, 1.0]
/// [1.0, 0.0, 1.0]
/// [1.0, 1.0, 1.0]
/// ```
const DEFAULT_3X3: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]];

use burn::{
    module::{Module, Param},
    nn::{
        PaddingConfig2d,
        conv::{Conv2d, Conv2dConfig},
    },
    prelude::Backend,
    tensor::{Float, Int, Tensor, TensorData},
};

use crate::rule;

/// Neighbour-counting convolution used by the GPU executor.
///
/// ## Shapes
///
/// - **Input**: `[1, 1, height, width]`, `0.0` dead / `1.0` alive
/// - **Output**: same shape and encoding, one generation later
#[derive(Module, Debug)]
pub struct GolModel<B: Backend> {
    /// 1 in, 1 out, 3x3, no bias, no padding (the torus padding is explicit).
    conv: Conv2d<B>,
}

impl<B: Backend> GolModel<B> {
    /// Creates the model with a custom `[1, 1, 3, 3]` kernel.
    pub fn new(kernel: Tensor<B, 4, Float>, device: &B::Device) -> Self {
        let mut conv = Conv2dConfig::new([1, 1], [3, 3])
            .with_bias(false)
            .with_padding(PaddingConfig2d::Valid)
            .init(device);
        conv.weight = Param::from_tensor(kernel);
        Self { conv }
    }

    /// Creates the model with the standard Moore-neighbourhood kernel.
    pub fn neighbour_counter(device: &B::Device) -> Self {
        let matrix: Tensor<B, 2, Float> = Tensor::from_floats(DEFAULT_3X3, device);
        Self::new(matrix.reshape([1, 1, 3, 3]), device)
    }

    /// Live-neighbour counts for every cell, wrapping both axes.
    pub fn neighbours(&self, grid: Tensor<B, 4, Float>) -> Tensor<B, 4, Float> {
        self.conv.forward(torus_pad(grid))
    }

    /// Computes the next generation.
    ///
    /// `rule` is the flattened table from [`rule_tensor`].
    pub fn forward(&self, grid: Tensor<B, 4, Float>, rule: Tensor<B, 1, Int>) -> Tensor<B, 4, Float> {
        let dims = grid.dims();
        let [_, _, height, width] = dims;

        let counts = self.neighbours(grid.clone()).round().int();
        let index = grid.int().mul_scalar(9).add(counts);

        rule.select(0, index.reshape([height * width]))
            .reshape(dims)
            .float()
    }
}

impl<B: Backend> Default for GolModel<B> {
    /// Standard kernel on the backend's default device.
    fn default() -> Self {
        Self::neighbour_counter(&B::Device::default())
    }
}

/// The rule table as an 18-entry integer tensor on `device`.
pub fn rule_tensor<B: Backend>(device: &B::Device) -> Tensor<B, 1, Int> {
    let table = rule::flattened();
    Tensor::from_data(TensorData::new(table.to_vec(), [table.len()]), device)
}

/// Surrounds a `[1, 1, H, W]` grid with one wrapped cell on every side.
pub fn torus_pad<B: Backend>(grid: Tensor<B, 4, Float>) -> Tensor<B, 4, Float> {
    let [batch, channels, height, width] = grid.dims();

    let top = grid.clone().slice([0..batch, 0..channels, height - 1..height, 0..width]);
    let bottom = grid.clone().slice([0..batch, 0..channels, 0..1, 0..width]);
    let rows = Tensor::cat(vec![top, grid, bottom], 2);

    let height = height + 2;
    let left = rows.clone().slice([0..batch, 0..channels, 0..height, width - 1..width]);
    let right = rows.clone().slice([0..batch, 0..channels, 0..height, 0..1]);
    Tensor::cat(vec![left, rows, right], 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type B = NdArray;

    fn tensor(rows: &[&[f32]]) -> Tensor<B, 4, Float> {
        let height = rows.len();
        let width = rows[0].len();
        let flat: Vec<f32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Tensor::<B, 1>::from_data(TensorData::new(flat, [height * width]), &Default::default())
            .reshape([1, 1, height, width])
    }

    fn values(t: Tensor<B, 4, Float>) -> Vec<f32> {
        t.into_data().convert::<f32>().to_vec::<f32>().unwrap()
    }

    #[test]
    fn pad_wraps_both_axes() {
        let grid = tensor(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let padded = torus_pad(grid);
        assert_eq!(padded.dims(), [1, 1, 4, 4]);
        #[rustfmt::skip]
        let expected = vec![
            4.0, 3.0, 4.0, 3.0,
            2.0, 1.0, 2.0, 1.0,
            4.0, 3.0, 4.0, 3.0,
            2.0, 1.0, 2.0, 1.0,
        ];
        assert_eq!(values(padded), expected);
    }

    #[test]
    fn single_cell_counts_itself_eight_times() {
        let model = GolModel::<B>::default();
        let counts = model.neighbours(tensor(&[&[1.0]]));
        assert_eq!(values(counts), vec![8.0]);
    }

    #[test]
    fn blinker_flips() {
        let device = Default::default();
        let model = GolModel::<B>::neighbour_counter(&device);
        let rule = rule_tensor::<B>(&device);
        let grid = tensor(&[
            &[0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 1.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0],
        ]);
        let next = model.forward(grid, rule);
        #[rustfmt::skip]
        let expected = vec![
            0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(values(next), expected);
    }
}
