//! Section navigation events.
//!
//! The navigation layer announces section changes through an explicit
//! subscription contract instead of anyone patching anyone else's methods.
//! An accessibility layer subscribes to mirror changes into a live region;
//! an analytics layer can subscribe the same way.

/// Receives section-change notifications.
pub trait SectionObserver {
    fn section_changed(&self, section: &str);
}

/// Owner-driven event bus for section navigation. Notifications run
/// synchronously, in subscription order, on the caller's thread.
#[derive(Default)]
pub struct SectionEvents {
    observers: Vec<Box<dyn SectionObserver>>,
    current: Option<String>,
}

impl SectionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn SectionObserver>) {
        self.observers.push(observer);
    }

    /// Record the new current section and notify every observer. Observers
    /// are notified even when the target equals the current section; a
    /// repeated click still re-announces for screen readers.
    pub fn navigate(&mut self, section: &str) {
        self.current = Some(section.to_string());
        for observer in &self.observers {
            observer.section_changed(section);
        }
    }

    /// The most recently navigated-to section, if any.
    pub fn current_section(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
