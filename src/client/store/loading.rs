use std::collections::BTreeMap;

use dioxus::prelude::*;

/// Named in-flight flags of the mounted pages; the overlay shows while any
/// of them is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadingState {
    flags: BTreeMap<String, bool>,
}

impl LoadingState {
    pub fn set(&mut self, source: impl Into<String>, loading: bool) {
        self.flags.insert(source.into(), loading);
    }

    pub fn remove(&mut self, source: &str) {
        self.flags.remove(source);
    }

    pub fn is_loading(&self) -> bool {
        self.flags.values().any(|loading| *loading)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct LoadingContext {
    inner: Signal<LoadingState>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(LoadingState::default()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().is_loading()
    }

    pub fn set(&mut self, source: &str, loading: bool) {
        // Skip no-op writes, they would wake every subscriber
        if self.inner.peek().flags.get(source) == Some(&loading) {
            return;
        }
        self.inner.write().set(source, loading);
    }

    pub fn remove(&mut self, source: &str) {
        self.inner.write().remove(source);
    }
}

/// Keeps flag `source` in sync with `busy`, which is re-evaluated whenever
/// the signals it reads change. The flag is removed when the component
/// unmounts.
pub fn use_loading_flag(source: impl Into<String>, mut busy: impl FnMut() -> bool + 'static) {
    let mut loading = use_context::<LoadingContext>();
    let source = use_hook(|| source.into());

    let flag = source.clone();
    use_effect(move || {
        let value = busy();
        loading.set(&flag, value);
    });

    use_drop(move || loading.remove(&source));
}
