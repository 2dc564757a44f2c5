// Adapters layer: translation between the outside world and the resolver.

pub mod http;
