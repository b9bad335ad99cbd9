use crate::model::Route;

/// Routes in visitation order. Owned by a single walk.
#[derive(Debug, Default)]
pub struct RouteSink {
    routes: Vec<Route>,
}

impl RouteSink {
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}
