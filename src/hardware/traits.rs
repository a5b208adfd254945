use super::port::Level;

pub trait Led {
    fn toggle(&mut self);
    fn level(&self) -> Level;
}

pub trait Button {
    fn is_pressed(&self) -> bool;
}
