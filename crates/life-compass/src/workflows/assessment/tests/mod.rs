mod common;
mod diagnosis;
mod routing;
