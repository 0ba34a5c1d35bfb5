use strum_macros::EnumIter;

#[repr(usize)]
#[derive(Clone, Copy, Debug, EnumIter, PartialEq)]
pub enum Cartesian {
    X = 0usize,
    Y = 1usize,
    Z = 2usize,
}

pub const CC_X: usize = Cartesian::X as usize;
pub const CC_Y: usize = Cartesian::Y as usize;
pub const CC_Z: usize = Cartesian::Z as usize;
