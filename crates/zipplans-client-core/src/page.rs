//! Generic per-resource page controller: the authoritative collection, the
//! current record, the modal flags, and the create/update forms.

use serde_json::Value;

use crate::modal::{ModalFlags, ModalForm, ModalOp};
use crate::notify::{NotificationSink, Severity};
use crate::resource::{Draft, ListRender, Resource, render_list};
use zipplans_api_client::{Gateway, Method};

/// State for one resource's management page.
///
/// The collection starts empty, is populated by a full-replace fetch, and is
/// replaced wholesale after every successful mutation; there is no
/// client-side splicing. All state here is owned by this instance and never
/// shared across resources.
#[derive(Debug)]
pub struct ResourcePage<R: Resource> {
    pub records: Vec<R>,
    pub current: Option<R>,
    pub loading: bool,
    pub modals: ModalFlags,
    pub create_form: ModalForm<R::Draft>,
    pub update_form: ModalForm<R::Draft>,
}

impl<R: Resource> Default for ResourcePage<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourcePage<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            current: None,
            loading: false,
            modals: ModalFlags::default(),
            create_form: ModalForm::default(),
            update_form: ModalForm::default(),
        }
    }

    /// Full-replace fetch of the collection.
    ///
    /// On a non-200 result the collection is left unchanged. Overlapping
    /// loads carry no sequencing token: responses apply in arrival order, so
    /// a slow stale response can overwrite fresher state. Accepted
    /// limitation, exercised by the arrival-order test rather than fixed.
    pub async fn load(&mut self, gateway: &dyn Gateway) {
        self.loading = true;
        let response = gateway.send(Method::Get, R::COLLECTION_PATH, None).await;
        if response.is(200) {
            match decode_records::<R>(response.data) {
                Ok(records) => self.records = records,
                Err(err) => {
                    tracing::warn!(resource = R::NOUN, %err, "failed to decode collection");
                }
            }
        } else {
            tracing::warn!(
                resource = R::NOUN,
                status = response.http_status,
                message = %response.message,
                "failed to load collection"
            );
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.modals.set(ModalOp::Create, true);
    }

    /// Sets the current record and raises the update flag, seeding the
    /// update form from the record's write shape. Caller contract: the
    /// record came from the collection, so its `_id` is non-empty.
    pub fn select_for_edit(&mut self, record: &R) {
        debug_assert!(!record.id().is_empty());
        self.update_form.seed(record.draft());
        self.current = Some(record.clone());
        self.modals.set(ModalOp::Update, true);
    }

    pub fn select_for_delete(&mut self, record: &R) {
        debug_assert!(!record.id().is_empty());
        self.current = Some(record.clone());
        self.modals.set(ModalOp::Delete, true);
    }

    /// Closes one modal; create/update closes also discard the draft. No
    /// request is sent.
    pub fn close(&mut self, op: ModalOp) {
        self.modals.set(op, false);
        match op {
            ModalOp::Create => self.create_form.reset(),
            ModalOp::Update => self.update_form.reset(),
            ModalOp::Delete => {}
        }
    }

    /// The canonical three-way rendering decision for this page's list.
    #[must_use]
    pub fn render(&self) -> ListRender<'_, R> {
        render_list(self.loading, &self.records)
    }

    /// Validates and submits the create form. 201 closes the modal, resets
    /// the draft, and refetches; anything else surfaces the server message
    /// and leaves the draft intact for a retry.
    pub async fn submit_create(&mut self, gateway: &dyn Gateway, notifier: &dyn NotificationSink) {
        if !self.create_form.validate() {
            return;
        }
        self.create_form.submitting = true;
        let body = draft_body(&self.create_form.draft);
        let response = gateway
            .send(Method::Post, R::COLLECTION_PATH, Some(body))
            .await;
        self.create_form.submitting = false;

        if !response.is(201) {
            notifier.notify("Error", &response.message, Severity::Danger);
            return;
        }

        notifier.notify(
            &format!("{} created", R::NOUN),
            &response.message,
            Severity::Success,
        );
        self.close(ModalOp::Create);
        self.load(gateway).await;
    }

    /// Validates and submits the update form against the current record.
    pub async fn submit_update(&mut self, gateway: &dyn Gateway, notifier: &dyn NotificationSink) {
        let Some(id) = self.current_id() else {
            return;
        };
        if !self.update_form.validate() {
            return;
        }
        self.update_form.submitting = true;
        let path = format!("{}/{id}", R::COLLECTION_PATH);
        let body = draft_body(&self.update_form.draft);
        let response = gateway.send(Method::Put, &path, Some(body)).await;
        self.update_form.submitting = false;

        if !response.is(200) {
            notifier.notify("Error", &response.message, Severity::Danger);
            return;
        }

        notifier.notify(
            &format!("{} updated", R::NOUN),
            &response.message,
            Severity::Success,
        );
        self.close(ModalOp::Update);
        self.load(gateway).await;
    }

    /// Deletes the current record. No draft is involved.
    pub async fn submit_delete(&mut self, gateway: &dyn Gateway, notifier: &dyn NotificationSink) {
        let Some(id) = self.current_id() else {
            return;
        };
        let path = format!("{}/{id}", R::COLLECTION_PATH);
        let response = gateway.send(Method::Delete, &path, None).await;

        if !response.is(200) {
            notifier.notify("Error", &response.message, Severity::Danger);
            return;
        }

        notifier.notify(
            &format!("{} deleted", R::NOUN),
            &response.message,
            Severity::Success,
        );
        self.modals.set(ModalOp::Delete, false);
        self.load(gateway).await;
    }

    fn current_id(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|record| record.id().to_string())
            .filter(|id| !id.is_empty())
    }
}

fn draft_body<D: Draft>(draft: &D) -> Value {
    serde_json::to_value(draft).unwrap_or(Value::Null)
}

fn decode_records<R: Resource>(data: Option<Value>) -> Result<Vec<R>, serde_json::Error> {
    serde_json::from_value(data.unwrap_or_else(|| Value::Array(Vec::new())))
}
