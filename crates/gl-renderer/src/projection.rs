/// Column-major orthographic projection mapping window pixels to clip space.
///
/// `(0, 0)` is the top left of the window and `(width, height)` the bottom
/// right, matching the row order of captured images. Depth covers `0..100`.
pub fn orthographic(width: f32, height: f32) -> [[f32; 4]; 4] {
    const NEAR: f32 = 0.0;
    const FAR: f32 = 100.0;

    let (left, right) = (0.0, width);
    let (top, bottom) = (0.0, height);

    [
        [2.0 / (right - left), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (top - bottom), 0.0, 0.0],
        [0.0, 0.0, -2.0 / (FAR - NEAR), 0.0],
        [
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(FAR + NEAR) / (FAR - NEAR),
            1.0,
        ],
    ]
}
