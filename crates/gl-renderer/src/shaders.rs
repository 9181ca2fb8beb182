//! GLSL 1.20 so the program runs on the OpenGL 2.1 context.

pub const VERTEX: &str = r#"
#version 120

attribute vec2 position;
attribute vec2 tex_coords;

uniform mat4 projection;

varying vec2 v_tex_coords;

void main() {
    v_tex_coords = tex_coords;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

pub const FRAGMENT: &str = r#"
#version 120

uniform sampler2D capture;

varying vec2 v_tex_coords;

void main() {
    gl_FragColor = texture2D(capture, v_tex_coords);
}
"#;
