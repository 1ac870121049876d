use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use zendesk_api::{Macro, MacroAction, MacroApi, Result, ZendeskError};
use zendesk_provider_sdk::{Attributes, Value};

/// A recorded call to the macro API
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Macro),
    Get(i64),
    Update(i64, Macro),
    Delete(i64),
}

/// Scripted MacroApi double: replays queued responses and records calls
#[derive(Default)]
pub struct RecordingMacroApi {
    calls: Mutex<Vec<Call>>,
    macros: Mutex<VecDeque<Result<Macro>>>,
    deletes: Mutex<VecDeque<Result<()>>>,
}

impl RecordingMacroApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(m: Macro) -> Self {
        let api = Self::new();
        api.push_macro(Ok(m));
        api
    }

    pub fn failing(status: u16) -> Self {
        let api = Self::new();
        api.push_macro(Err(api_error(status)));
        api.push_delete(Err(api_error(status)));
        api
    }

    pub fn push_macro(&self, response: Result<Macro>) {
        self.macros.lock().unwrap().push_back(response);
    }

    pub fn push_delete(&self, response: Result<()>) {
        self.deletes.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_macro(&self) -> Result<Macro> {
        self.macros
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted macro response left")
    }
}

#[async_trait]
impl MacroApi for RecordingMacroApi {
    async fn create_macro(&self, m: Macro) -> Result<Macro> {
        self.record(Call::Create(m));
        self.next_macro()
    }

    async fn get_macro(&self, id: i64) -> Result<Macro> {
        self.record(Call::Get(id));
        self.next_macro()
    }

    async fn update_macro(&self, id: i64, m: Macro) -> Result<Macro> {
        self.record(Call::Update(id, m));
        self.next_macro()
    }

    async fn delete_macro(&self, id: i64) -> Result<()> {
        self.record(Call::Delete(id));
        self.deletes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

pub fn api_error(status: u16) -> ZendeskError {
    ZendeskError::Api {
        status,
        body: format!("{{\"error\":\"status {}\"}}", status),
    }
}

pub fn action(field: &str, value: &str) -> Attributes {
    let mut block = Attributes::new();
    block.insert("field".to_string(), Value::from(field));
    block.insert("value".to_string(), Value::from(value));
    block
}

#[allow(dead_code)]
pub fn sample_macro(id: i64) -> Macro {
    Macro {
        id,
        url: format!("https://acme.zendesk.com/api/v2/macros/{}.json", id),
        title: "foobar".to_string(),
        description: "foobar".to_string(),
        position: 50,
        restriction: "restriction".to_string(),
        active: true,
        actions: vec![MacroAction::new("status", "open")],
        ..Default::default()
    }
}
