//! In-memory collaborators for handler tests

use async_trait::async_trait;
use bank_system_api::domain::{BankAccountDetails, BankUser, NewBankUser};
use bank_system_api::error::{ApiError, ApiResult};
use bank_system_api::service::{BankAccountService, EmailSender, UserManager};
use chrono::{Duration, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::models::AllBankAccountsListViewModel;
use crate::render::{RequestContext, ViewRenderer};

pub fn test_account(n: usize) -> BankAccountDetails {
    BankAccountDetails {
        id: Uuid::new_v4(),
        name: HeaplessString::try_from(format!("Account {n}").as_str()).unwrap(),
        unique_id: HeaplessString::try_from(format!("ABC{n:013}").as_str()).unwrap(),
        balance: Decimal::new(n as i64 * 1_000, 2),
        created_on: Utc::now() - Duration::minutes(n as i64),
        user_id: Uuid::new_v4(),
        user_full_name: HeaplessString::try_from(format!("Owner {n}").as_str()).unwrap(),
    }
}

/// `n` accounts, newest first
pub fn test_accounts(n: usize) -> Vec<BankAccountDetails> {
    (0..n).map(test_account).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingCall {
    Page,
    Count,
}

pub struct InMemoryBankAccountService {
    accounts: Vec<BankAccountDetails>,
    reported_count: Option<usize>,
    failing: Option<FailingCall>,
    rendezvous: Option<Barrier>,
    requested_pages: Mutex<Vec<(usize, usize)>>,
    count_calls: AtomicUsize,
}

impl InMemoryBankAccountService {
    pub fn new(accounts: Vec<BankAccountDetails>) -> Self {
        Self {
            accounts,
            reported_count: None,
            failing: None,
            rendezvous: None,
            requested_pages: Mutex::new(Vec::new()),
            count_calls: AtomicUsize::new(0),
        }
    }

    /// Report `count` from `get_count_of_accounts` instead of the stored length
    pub fn with_reported_count(mut self, count: usize) -> Self {
        self.reported_count = Some(count);
        self
    }

    pub fn failing(mut self, call: FailingCall) -> Self {
        self.failing = Some(call);
        self
    }

    /// Make the page read and the count read wait for each other
    pub fn with_rendezvous(mut self) -> Self {
        self.rendezvous = Some(Barrier::new(2));
        self
    }

    /// `(page_index, count)` of every `get_accounts` call, in call order
    pub fn requested_pages(&self) -> Vec<(usize, usize)> {
        self.requested_pages.lock().unwrap().clone()
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    async fn meet(&self) {
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl BankAccountService for InMemoryBankAccountService {
    async fn get_accounts(&self, page_index: usize, count: usize) -> ApiResult<Vec<BankAccountDetails>> {
        self.requested_pages.lock().unwrap().push((page_index, count));
        self.meet().await;
        if self.failing == Some(FailingCall::Page) {
            return Err(ApiError::DatabaseError("page read failed".to_string()));
        }
        let skip = page_index.max(1).saturating_sub(1).saturating_mul(count);
        Ok(self.accounts.iter().skip(skip).take(count).cloned().collect())
    }

    async fn get_count_of_accounts(&self) -> ApiResult<usize> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.meet().await;
        if self.failing == Some(FailingCall::Count) {
            return Err(ApiError::DatabaseError("count read failed".to_string()));
        }
        Ok(self.reported_count.unwrap_or(self.accounts.len()))
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    rendered: Mutex<Vec<AllBankAccountsListViewModel>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<AllBankAccountsListViewModel> {
        self.rendered.lock().unwrap().clone()
    }
}

impl ViewRenderer<AllBankAccountsListViewModel> for RecordingRenderer {
    type Output = String;

    fn render(&self, view_name: &str, model: &AllBankAccountsListViewModel, _ctx: &RequestContext) -> ApiResult<String> {
        self.rendered.lock().unwrap().push(model.clone());
        let accounts = &model.bank_accounts;
        Ok(format!(
            "{view_name}: page {} of {}, {} accounts",
            accounts.current_page(),
            accounts.total_pages(),
            accounts.len()
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub sender: String,
    pub receiver: String,
    pub subject: String,
    pub html_message: String,
}

#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail: bool,
}

impl RecordingEmailSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, sender: &str, receiver: &str, subject: &str, html_message: &str) -> ApiResult<()> {
        if self.fail {
            return Err(ApiError::EmailError("SMTP server unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            subject: subject.to_string(),
            html_message: html_message.to_string(),
        });
        Ok(())
    }
}

/// Identity provider that rejects taken emails and passwords without a digit
#[derive(Default)]
pub struct InMemoryUserManager {
    users: Mutex<Vec<BankUser>>,
}

const CONFIRMATION_TOKEN_PREFIX: &str = "tok+en/";

impl InMemoryUserManager {
    pub fn users(&self) -> Vec<BankUser> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserManager for InMemoryUserManager {
    async fn create(&self, user: NewBankUser, password: &str) -> ApiResult<BankUser> {
        let mut users = self.users.lock().unwrap();

        let mut errors = Vec::new();
        if users.iter().any(|u| u.user_name == user.user_name) {
            errors.push(format!("User name '{}' is already taken.", user.user_name));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if !errors.is_empty() {
            return Err(ApiError::IdentityError(errors));
        }

        let created = BankUser {
            id: Uuid::new_v4(),
            user_name: user.user_name,
            email: user.email,
            full_name: user.full_name,
            email_confirmed: false,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn generate_email_confirmation_token(&self, user: &BankUser) -> ApiResult<String> {
        Ok(format!("{CONFIRMATION_TOKEN_PREFIX}{}", user.id.simple()))
    }
}
