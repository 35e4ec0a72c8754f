// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct ScreenDimensions {
    width: f32,
    height: f32,
}

@group(0) @binding(0)
var<uniform> screen: ScreenDimensions;

struct VertexInput {
    @location(0) position: vec2<f32>, // Screen-space pixels
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.color = model.color;

    // Screen coordinates to NDC. Screen y grows downward, NDC y upward,
    // hence the flip.
    let normalized_x = (model.position.x / (screen.width / 2.0)) - 1.0;
    let normalized_y = 1.0 - (model.position.y / (screen.height / 2.0));

    out.clip_position = vec4<f32>(normalized_x, normalized_y, 0.0, 1.0);

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
