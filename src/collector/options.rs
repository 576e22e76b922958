/// Options for [`RouteCollector::collect_with`](super::RouteCollector::collect_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    include_unannotated: bool,
}

impl CollectOptions {
    pub fn new() -> Self {
        Self {
            include_unannotated: true,
        }
    }

    /// Whether members without a verb annotation are reported. Defaults to `true`.
    pub fn include_unannotated(mut self, include: bool) -> Self {
        self.include_unannotated = include;
        self
    }

    pub fn includes_unannotated(&self) -> bool {
        self.include_unannotated
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self::new()
    }
}
