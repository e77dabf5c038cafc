/// Route the store navigates to after a successful create or update.
pub const ROOT_ROUTE: &str = "/";

pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate_to(&self, route: &str) {
        self(route)
    }
}
