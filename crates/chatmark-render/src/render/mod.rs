//! Node walkers behind [`Template::render`](crate::Template::render) and
//! [`StyledTemplate::render`](crate::StyledTemplate::render).

mod flat;
mod styled;

pub(crate) use flat::render_flat;
pub(crate) use styled::render_styled;
