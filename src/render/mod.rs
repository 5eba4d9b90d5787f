//! Ray-to-color evaluators: on/off, flat, point-light, and path tracer.

mod flat;
mod onoff;
mod path_tracer;
mod pointlight;

pub use flat::FlatTracer;
pub use onoff::OnOffTracer;
pub use path_tracer::PathTracer;
pub use pointlight::PointLightTracer;
