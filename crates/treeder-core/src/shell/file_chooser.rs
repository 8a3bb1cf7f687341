//! File chooser hand-off: at most one picker exchange outstanding at a time.
//!
//! The page asks for a file, the shell parks the page's callback here and
//! hands a request to the platform picker; when the picker result comes back
//! the callback is resolved and the slot is freed.

use crate::error::ShellError;

/// Receives the chosen file references, or `None` when nothing was chosen.
pub type FileCallback = Box<dyn FnOnce(Option<Vec<String>>)>;

/// What the page asked the picker for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChooserParams {
    /// MIME types or extensions from the input's `accept` attribute.
    pub accept_types: Vec<String>,
    pub allow_multiple: bool,
    /// Prefer capturing new media (camera) over picking existing files.
    pub capture: bool,
}

/// Request handed to the platform picker. The result must come back with the
/// same `request_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChooserRequest {
    pub request_code: u32,
    pub params: FileChooserParams,
}

/// Result reported by the platform picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(Vec<String>),
    Cancelled,
}

struct Pending {
    request_code: u32,
    params: FileChooserParams,
    callback: FileCallback,
}

/// Single outstanding file chooser exchange.
#[derive(Default)]
pub struct FileChooserSlot {
    next_code: u32,
    pending: Option<Pending>,
}

impl std::fmt::Debug for FileChooserSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChooserSlot")
            .field("next_code", &self.next_code)
            .field("pending", &self.pending.as_ref().map(|p| p.request_code))
            .finish()
    }
}

impl FileChooserSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Parks `callback` and returns the request for the platform picker.
    ///
    /// Fails with [`ShellError::FileChooserBusy`] while another request is
    /// outstanding; the rejected callback is resolved with `None` right away so
    /// the page does not wait forever.
    pub fn begin(
        &mut self,
        params: FileChooserParams,
        callback: FileCallback,
    ) -> Result<FileChooserRequest, ShellError> {
        if let Some(p) = &self.pending {
            tracing::warn!(pending = p.request_code, "file chooser already pending");
            callback(None);
            return Err(ShellError::FileChooserBusy {
                pending: p.request_code,
            });
        }

        self.next_code = self.next_code.wrapping_add(1);
        let request_code = self.next_code;
        self.pending = Some(Pending {
            request_code,
            params: params.clone(),
            callback,
        });
        tracing::debug!(request_code, "file chooser started");
        Ok(FileChooserRequest {
            request_code,
            params,
        })
    }

    /// Delivers the picker result to the parked callback and frees the slot.
    pub fn complete(&mut self, request_code: u32, outcome: PickerOutcome) -> Result<(), ShellError> {
        let pending = match self.pending.take() {
            Some(p) if p.request_code == request_code => p,
            other => {
                self.pending = other;
                return Err(ShellError::NoPendingFileChooser(request_code));
            }
        };

        let files = match outcome {
            PickerOutcome::Cancelled => None,
            PickerOutcome::Selected(files) if files.is_empty() => None,
            PickerOutcome::Selected(mut files) => {
                if !pending.params.allow_multiple {
                    files.truncate(1);
                }
                Some(files)
            }
        };
        tracing::debug!(
            request_code,
            count = files.as_ref().map_or(0, |f| f.len()),
            "file chooser completed"
        );
        (pending.callback)(files);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Received = Rc<RefCell<Vec<Option<Vec<String>>>>>;

    fn recorder() -> (Received, impl Fn() -> FileCallback) {
        let received: Received = Rc::new(RefCell::new(Vec::new()));
        let r = Rc::clone(&received);
        let make = move || {
            let r = Rc::clone(&r);
            Box::new(move |files: Option<Vec<String>>| r.borrow_mut().push(files)) as FileCallback
        };
        (received, make)
    }

    #[test]
    fn single_exchange() {
        let (received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let req = slot.begin(FileChooserParams::default(), cb()).unwrap();
        assert!(slot.is_pending());
        slot.complete(
            req.request_code,
            PickerOutcome::Selected(vec!["content://media/1".to_string()]),
        )
        .unwrap();
        assert!(!slot.is_pending());
        assert_eq!(
            *received.borrow(),
            vec![Some(vec!["content://media/1".to_string()])]
        );
    }

    #[test]
    fn second_request_while_pending_is_rejected() {
        let (received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let first = slot.begin(FileChooserParams::default(), cb()).unwrap();
        let err = slot.begin(FileChooserParams::default(), cb()).unwrap_err();
        assert!(matches!(err, ShellError::FileChooserBusy { pending } if pending == first.request_code));
        // Rejected callback resolved with nothing; first still pending.
        assert_eq!(*received.borrow(), vec![None]);
        assert!(slot.is_pending());
        slot.complete(first.request_code, PickerOutcome::Cancelled).unwrap();
        assert_eq!(received.borrow().len(), 2);
    }

    #[test]
    fn cancelled_and_empty_deliver_none() {
        let (received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let req = slot.begin(FileChooserParams::default(), cb()).unwrap();
        slot.complete(req.request_code, PickerOutcome::Cancelled).unwrap();
        let req = slot.begin(FileChooserParams::default(), cb()).unwrap();
        slot.complete(req.request_code, PickerOutcome::Selected(Vec::new()))
            .unwrap();
        assert_eq!(*received.borrow(), vec![None, None]);
    }

    #[test]
    fn single_choice_keeps_first_file() {
        let (received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let req = slot.begin(FileChooserParams::default(), cb()).unwrap();
        slot.complete(
            req.request_code,
            PickerOutcome::Selected(vec!["a".to_string(), "b".to_string()]),
        )
        .unwrap();
        assert_eq!(*received.borrow(), vec![Some(vec!["a".to_string()])]);
    }

    #[test]
    fn multiple_choice_keeps_all() {
        let (received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let params = FileChooserParams {
            accept_types: vec!["image/*".to_string()],
            allow_multiple: true,
            capture: false,
        };
        let req = slot.begin(params, cb()).unwrap();
        assert_eq!(req.params.accept_types, vec!["image/*".to_string()]);
        slot.complete(
            req.request_code,
            PickerOutcome::Selected(vec!["a".to_string(), "b".to_string()]),
        )
        .unwrap();
        assert_eq!(
            *received.borrow(),
            vec![Some(vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn complete_without_pending_or_wrong_code() {
        let (_received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        assert!(matches!(
            slot.complete(7, PickerOutcome::Cancelled),
            Err(ShellError::NoPendingFileChooser(7))
        ));
        let req = slot.begin(FileChooserParams::default(), cb()).unwrap();
        assert!(slot
            .complete(req.request_code + 1, PickerOutcome::Cancelled)
            .is_err());
        assert!(slot.is_pending());
    }

    #[test]
    fn request_codes_advance() {
        let (_received, cb) = recorder();
        let mut slot = FileChooserSlot::new();
        let a = slot.begin(FileChooserParams::default(), cb()).unwrap();
        slot.complete(a.request_code, PickerOutcome::Cancelled).unwrap();
        let b = slot.begin(FileChooserParams::default(), cb()).unwrap();
        assert_ne!(a.request_code, b.request_code);
    }
}
