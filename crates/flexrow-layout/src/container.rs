//! An owned, editable item list with on-demand layout.
//!
//! [`FlowContainer`] never lays out on its own. Edits and option changes only
//! mark it dirty; the caller decides when to run [`FlowContainer::layout`] or
//! [`FlowContainer::layout_if_needed`].

use flexrow_core::{ContainerError, Size};
use tracing::debug;

use crate::flow::{layout, LayoutResult};
use crate::item::FlowItem;
use crate::options::FlowOptions;

/// Result of a container pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    pub result: LayoutResult,
    /// Whether the content size differs from the previous pass
    pub content_size_changed: bool,
}

/// Items plus the options they are laid out with.
#[derive(Debug, Clone)]
pub struct FlowContainer<I> {
    items: Vec<I>,
    options: FlowOptions,
    content_size: Size,
    last_container: Option<Size>,
    needs_layout: bool,
}

impl<I: FlowItem> Default for FlowContainer<I> {
    fn default() -> Self {
        Self::new(FlowOptions::default())
    }
}

impl<I: FlowItem> FlowContainer<I> {
    /// Create an empty container.
    pub fn new(options: FlowOptions) -> Self {
        Self::with_items(Vec::new(), options)
    }

    /// Create a container holding `items`.
    pub fn with_items(items: Vec<I>, options: FlowOptions) -> Self {
        Self {
            items,
            options,
            content_size: Size::ZERO,
            last_container: None,
            needs_layout: true,
        }
    }

    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    /// Replace the options. Marks the container dirty when they change.
    pub fn set_options(&mut self, options: FlowOptions) {
        if self.options != options {
            self.options = options;
            self.needs_layout = true;
        }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Mutable access to the items. Marks the container dirty.
    pub fn items_mut(&mut self) -> &mut [I] {
        self.needs_layout = true;
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item.
    pub fn push(&mut self, item: I) {
        self.items.push(item);
        self.needs_layout = true;
    }

    /// Insert an item at `index`, shifting later items right.
    pub fn insert(&mut self, index: usize, item: I) -> Result<(), ContainerError> {
        if index > self.items.len() {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item);
        self.needs_layout = true;
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<I, ContainerError> {
        if index >= self.items.len() {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.needs_layout = true;
        Ok(self.items.remove(index))
    }

    /// Remove every item matching `predicate`, keeping the order of the rest.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<I>
    where
        F: FnMut(&I) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if predicate(&item) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.items = kept;
        if !removed.is_empty() {
            self.needs_layout = true;
        }
        removed
    }

    /// Take back ownership of the items.
    pub fn into_items(self) -> Vec<I> {
        self.items
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Force the next [`layout_if_needed`](Self::layout_if_needed) to run.
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Content size from the most recent pass.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Preferred size for a host: its own width with the content height.
    pub fn intrinsic_content_size(&self, width: f64) -> Size {
        Size::new(width, self.content_size.height)
    }

    /// Run a full pass inside `container` and write frames to the items.
    pub fn layout(&mut self, container: Size) -> LayoutOutcome {
        let result = layout(&mut self.items, container, &self.options);
        let content_size_changed = result.content_size != self.content_size;
        if content_size_changed {
            debug!(
                old_height = self.content_size.height,
                new_height = result.content_size.height,
                "content size changed"
            );
            self.content_size = result.content_size;
        }
        self.last_container = Some(container);
        self.needs_layout = false;
        LayoutOutcome {
            result,
            content_size_changed,
        }
    }

    /// Run a pass only when dirty or when `container` differs from the last
    /// pass.
    pub fn layout_if_needed(&mut self, container: Size) -> Option<LayoutOutcome> {
        if !self.needs_layout && self.last_container == Some(container) {
            return None;
        }
        Some(self.layout(container))
    }
}
