use super::Rect;

/// Clickable regions recorded while drawing a frame.
///
/// Later regions sit on top of earlier ones.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    regions: Vec<(Rect, T)>,
}

impl<T> HitMap<T> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, target: T) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    /// Topmost target containing the point.
    pub fn at(&self, x: u16, y: u16) -> Option<&T> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| target)
    }

    /// Region of the first target matching the predicate.
    #[cfg(test)]
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, target)| predicate(target))
            .map(|(rect, _)| *rect)
    }
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
