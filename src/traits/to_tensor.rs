use burn::{
    prelude::*,
    tensor::{Data, Shape},
};

use crate::ds::{Table2, Table3};

/// A trait for converting tables to tensors
///
/// Lets model-estimation code built on `burn` consume the accumulated statistics directly,
/// e.g. dividing the visit tensor by its marginal to estimate transition probabilities.
pub trait ToTensor<B: Backend, const D: usize> {
    fn to_tensor(&self, device: &B::Device) -> Tensor<B, D>;
}

/// Table cells that can be widened to a float tensor element
///
/// Implemented for the cell types of the experience tables, `u64` visits and `f64` rewards.
pub trait TableCell: Copy {
    fn to_f64(self) -> f64;
}

impl TableCell for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl TableCell for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

fn to_data<T: TableCell, const D: usize>(values: &[T], dims: [usize; D]) -> Data<f64, D> {
    Data::new(
        values.iter().map(|&v| v.to_f64()).collect(),
        Shape::new(dims),
    )
}

impl<B: Backend, T: TableCell> ToTensor<B, 3> for Table3<T> {
    fn to_tensor(&self, device: &B::Device) -> Tensor<B, 3> {
        let data = to_data(self.as_slice(), self.dims());
        Tensor::from_data(data.convert::<B::FloatElem>(), device)
    }
}

impl<B: Backend, T: TableCell> ToTensor<B, 2> for Table2<T> {
    fn to_tensor(&self, device: &B::Device) -> Tensor<B, 2> {
        let data = to_data(self.as_slice(), self.dims());
        Tensor::from_data(data.convert::<B::FloatElem>(), device)
    }
}
