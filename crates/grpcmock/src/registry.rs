//! Method name to override table shared between the mock and its interceptors.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tonic::Status;

/// Type-erased payload stored for one method.
pub(crate) type Payload = Arc<dyn Any + Send + Sync>;

/// Mocked behavior installed for a single method.
///
/// `Response` keeps the message erased and the error as is, so an error-only
/// response never depends on a message type. `Handler` holds a
/// `UnaryHandler<Req, Resp>`. The concrete types are recovered by the
/// interceptor serving the call.
#[derive(Clone)]
pub(crate) enum Override {
    Response {
        resp: Option<Payload>,
        err: Option<Status>,
    },
    Handler(Payload),
}

/// Overrides keyed by short method name.
///
/// Lookups take the read lock, mutations the write lock. Entries are cloned
/// out of the map so no lock is held while a handler runs.
#[derive(Default)]
pub(crate) struct Registry {
    methods: RwLock<HashMap<String, Override>>,
}

impl Registry {
    /// Install `entry` for `method`, replacing whatever was there.
    pub(crate) fn set(&self, method: String, entry: Override) {
        self.methods.write().insert(method, entry);
    }

    /// Returns whether an entry was removed.
    pub(crate) fn unset(&self, method: &str) -> bool {
        self.methods.write().remove(method).is_some()
    }

    /// Returns the number of entries removed.
    pub(crate) fn clear(&self) -> usize {
        let mut methods = self.methods.write();
        let removed = methods.len();
        methods.clear();
        removed
    }

    pub(crate) fn lookup(&self, method: &str) -> Option<Override> {
        self.methods.read().get(method).cloned()
    }

    pub(crate) fn contains(&self, method: &str) -> bool {
        self.methods.read().contains_key(method)
    }

    pub(crate) fn len(&self) -> usize {
        self.methods.read().len()
    }
}
