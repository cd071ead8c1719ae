use super::{document, js_message};
use flagdeck::export::{ExportError, ExportHost};
use js_sys::{Array, Uint8Array};
use std::borrow::Cow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, HtmlDocument, HtmlElement,
    HtmlTextAreaElement, Url,
};

const OFFSCREEN: &str = "position:fixed;top:0;left:-9999px;opacity:0";

/// [`ExportHost`] over the DOM: a helper `<textarea>` for clipboard writes and a
/// temporary `<a download>` for file saves. Helper nodes never outlive the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

/// A helper node attached to the page; detached again when dropped.
struct Attached(Element);

impl Attached {
    fn append(parent: &HtmlElement, element: Element) -> Result<Self, JsValue> {
        parent.append_child(&element)?;
        Ok(Self(element))
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// An object URL; revoked when dropped.
struct ObjectUrl(String);

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

fn page() -> Result<(Document, HtmlElement), Cow<'static, str>> {
    let document = document().ok_or(Cow::Borrowed("no document"))?;
    let body = document.body().ok_or(Cow::Borrowed("document has no body"))?;
    Ok((document, body))
}

fn clipboard_error(message: impl Into<Cow<'static, str>>) -> ExportError {
    ExportError::Clipboard { message: message.into(), context: None }
}

fn save_error(message: impl Into<Cow<'static, str>>) -> ExportError {
    ExportError::Save { message: message.into(), context: None }
}

impl ExportHost for BrowserHost {
    fn write_clipboard(&self, text: &str) -> Result<(), ExportError> {
        let (document, body) = page().map_err(clipboard_error)?;

        let textarea = document
            .create_element("textarea")
            .map_err(|e| clipboard_error(js_message(&e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| clipboard_error("textarea is not an HtmlTextAreaElement"))?;
        textarea.set_value(text);
        textarea.set_attribute("readonly", "").map_err(|e| clipboard_error(js_message(&e)))?;
        textarea.set_attribute("style", OFFSCREEN).map_err(|e| clipboard_error(js_message(&e)))?;

        let _helper = Attached::append(&body, textarea.clone().into())
            .map_err(|e| clipboard_error(js_message(&e)))?;
        textarea.select();

        let copied = document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| clipboard_error("document is not an HtmlDocument"))?
            .exec_command("copy")
            .map_err(|e| clipboard_error(js_message(&e)))?;

        if copied { Ok(()) } else { Err(clipboard_error("copy command was rejected")) }
    }

    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let (document, body) = page().map_err(save_error)?;

        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| save_error(js_message(&e)))?;

        let url = ObjectUrl(
            Url::create_object_url_with_blob(&blob).map_err(|e| save_error(js_message(&e)))?,
        );

        let anchor = document
            .create_element("a")
            .map_err(|e| save_error(js_message(&e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| save_error("anchor is not an HtmlAnchorElement"))?;
        anchor.set_href(&url.0);
        anchor.set_download(file_name);

        let _helper =
            Attached::append(&body, anchor.clone().into()).map_err(|e| save_error(js_message(&e)))?;
        anchor.click();

        Ok(())
    }
}
