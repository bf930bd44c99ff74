//! Fixed color palette shared by kind defaults, user recoloring and the
//! selection highlight.

use cgmath::Vector3;

#[rustfmt::skip]
pub const PALETTE: [[f32; 3]; 13] = [
    [0.0,  1.0,  1.0 ],
    [1.0,  0.0,  1.0 ],
    [1.0,  1.0,  1.0 ],
    [0.5,  0.5,  0.0 ],
    [0.0,  0.5,  0.5 ],
    [0.5,  0.0,  0.5 ],
    [0.75, 0.75, 0.0 ],
    [0.25, 1.0,  0.75],
    [0.75, 1.0,  0.25],
    [1.0,  0.0,  0.0 ],
    [0.0,  1.0,  0.0 ],
    [0.75, 0.75, 0.25],
    [0.0,  0.0,  1.0 ],
];

/// Entries the user can pick with the number keys.
pub const USER_COLORS: usize = 9;

/// Color drawn for the selected instance until the user picks one.
pub const HIGHLIGHT: usize = 12;

pub fn color(index: usize) -> Option<Vector3<f32>> {
    PALETTE.get(index).map(|&rgb| rgb.into())
}

pub fn highlight() -> Vector3<f32> {
    PALETTE[HIGHLIGHT].into()
}
