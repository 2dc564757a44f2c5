/// Read-only source of café names keyed by city.
pub trait CafeCatalog: Send + Sync {
    fn lookup(&self, city: &str) -> Option<&[String]>;
}

impl<C: CafeCatalog + ?Sized> CafeCatalog for &C {
    fn lookup(&self, city: &str) -> Option<&[String]> {
        (**self).lookup(city)
    }
}

impl<C: CafeCatalog + ?Sized> CafeCatalog for std::sync::Arc<C> {
    fn lookup(&self, city: &str) -> Option<&[String]> {
        (**self).lookup(city)
    }
}
