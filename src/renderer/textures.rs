//! Texture name → handle lookup with a fallback

use std::collections::HashMap;

/// Opaque handle the host's renderer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// Plain white texture used when a name is unknown
    pub const FALLBACK: TextureHandle = TextureHandle(0);
}

/// Resolves texture names. Never fails: unknown names map to a fallback.
pub trait TextureLookup {
    fn get_texture(&self, name: &str) -> TextureHandle;
}

/// Simple registry filled by the host after loading its assets
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    handles: HashMap<String, TextureHandle>,
    next: u32,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            next: 1,
        }
    }

    /// Register a name, returning its handle (existing names keep theirs)
    pub fn register(&mut self, name: &str) -> TextureHandle {
        if let Some(&handle) = self.handles.get(name) {
            return handle;
        }
        let handle = TextureHandle(self.next.max(1));
        self.next = handle.0 + 1;
        self.handles.insert(name.to_string(), handle);
        handle
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl TextureLookup for TextureRegistry {
    fn get_texture(&self, name: &str) -> TextureHandle {
        match self.handles.get(name) {
            Some(&handle) => handle,
            None => {
                log::debug!("Texture {name:?} missing, using fallback");
                TextureHandle::FALLBACK
            }
        }
    }
}
