pub const LAZY_ROOT_MARGIN: &str = "100px";
pub const LAZY_THRESHOLD: f64 = 0.1;
pub const LOADED_CLASS: &str = "loaded";

/// Deferred image sources, handed out once each.
#[derive(Clone, Debug, Default)]
pub struct LazyImages {
    pending: Vec<Option<String>>,
}

impl LazyImages {
    pub fn new(sources: impl IntoIterator<Item = String>) -> Self {
        Self {
            pending: sources.into_iter().map(Some).collect(),
        }
    }

    pub fn on_intersect(&mut self, index: usize) -> Option<String> {
        self.pending.get_mut(index)?.take()
    }
}

/// Horizontal scroll delta for a wheel event, or `None` when the browser
/// should handle it.
pub fn horizontal_delta(delta_x: f64, delta_y: f64) -> Option<f64> {
    (delta_y.abs() > delta_x.abs()).then_some(delta_y)
}

#[cfg(test)]
impl LazyImages {
    fn remaining(&self) -> usize {
        self.pending.iter().filter(|source| source.is_some()).count()
    }
}
