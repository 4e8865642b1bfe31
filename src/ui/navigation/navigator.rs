use crate::ui::navigation::intent::Route;

/// Outbound navigation requests emitted by view-models.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
    fn go_back(&self);
}

/// Modal notification primitive.
pub trait Alerts: Send + Sync {
    fn alert(&self, message: &str);
}
