pub trait Zero {
    fn zero() -> Self;
}

pub trait Length {
    fn length2(&self) -> f32;
    fn length(&self) -> f32;
}

pub trait Normalizable {
    fn normalize(&self) -> Self;
}

pub trait Dotable {
    type Operand;
    fn dot(&self, other: &Self::Operand) -> f32;
}
