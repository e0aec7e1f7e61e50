//! Внешний леджер (кошелёк игрока).
//!
//! Движок НЕ хранит баланс: он только спрашивает `can_afford`, списывает ставку
//! и начисляет награду. Все три операции считаются атомарными и надёжными.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::currency::{Coins, Tickets};

/// Ошибки леджера.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Леджер недоступен: {0}")]
    Unavailable(String),

    #[error("Недостаточно монет: нужно {needed}, есть {available}")]
    InsufficientBalance { needed: u64, available: u64 },
}

/// Абстракция леджера.
///
/// В проде за ней сидит хранилище/бэкенд, в тестах — `InMemoryLedger`.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Хватит ли монет на ставку.
    async fn can_afford(&self, amount: Coins) -> bool;

    /// Списать монеты (ставка).
    async fn debit(&mut self, amount: Coins, reason: &str) -> Result<(), LedgerError>;

    /// Начислить билеты и/или монеты (выплата).
    async fn credit(&mut self, tickets: Tickets, coins: Coins, reason: &str) -> Result<(), LedgerError>;
}

/// Запись журнала леджера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerEntry {
    Debit { coins: Coins, reason: String },
    Credit { tickets: Tickets, coins: Coins, reason: String },
}

/// Простая in-memory реализация для тестов и локального запуска.
///
/// Умеет "ронять" следующие N списаний/начислений, чтобы проверять
/// поведение движка при недоступном леджере.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    coins: Coins,
    tickets: Tickets,
    journal: Vec<LedgerEntry>,
    failing_debits: u32,
    failing_credits: u32,
}

impl InMemoryLedger {
    pub fn new(coins: u64) -> Self {
        Self {
            coins: Coins(coins),
            ..Self::default()
        }
    }

    pub fn coins(&self) -> Coins {
        self.coins
    }

    pub fn tickets(&self) -> Tickets {
        self.tickets
    }

    pub fn journal(&self) -> &[LedgerEntry] {
        &self.journal
    }

    /// Следующие `n` вызовов `debit` завершатся ошибкой.
    pub fn fail_next_debits(&mut self, n: u32) {
        self.failing_debits = n;
    }

    /// Следующие `n` вызовов `credit` завершатся ошибкой.
    pub fn fail_next_credits(&mut self, n: u32) {
        self.failing_credits = n;
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn can_afford(&self, amount: Coins) -> bool {
        self.coins >= amount
    }

    async fn debit(&mut self, amount: Coins, reason: &str) -> Result<(), LedgerError> {
        if self.failing_debits > 0 {
            self.failing_debits -= 1;
            return Err(LedgerError::Unavailable("debit: backend offline".into()));
        }
        if self.coins < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount.0,
                available: self.coins.0,
            });
        }
        self.coins -= amount;
        self.journal.push(LedgerEntry::Debit {
            coins: amount,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn credit(&mut self, tickets: Tickets, coins: Coins, reason: &str) -> Result<(), LedgerError> {
        if self.failing_credits > 0 {
            self.failing_credits -= 1;
            return Err(LedgerError::Unavailable("credit: backend offline".into()));
        }
        self.coins += coins;
        self.tickets += tickets;
        self.journal.push(LedgerEntry::Credit {
            tickets,
            coins,
            reason: reason.to_string(),
        });
        Ok(())
    }
}

/// Один кошелёк на несколько игровых столов.
#[derive(Debug, Default)]
pub struct SharedLedger<L> {
    inner: Arc<Mutex<L>>,
}

impl<L> Clone for SharedLedger<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: Ledger> SharedLedger<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Доступ к обёрнутому леджеру (для чтения балансов и т.п.).
    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, L> {
        self.inner.lock().await
    }
}

#[async_trait]
impl<L: Ledger> Ledger for SharedLedger<L> {
    async fn can_afford(&self, amount: Coins) -> bool {
        self.inner.lock().await.can_afford(amount).await
    }

    async fn debit(&mut self, amount: Coins, reason: &str) -> Result<(), LedgerError> {
        self.inner.lock().await.debit(amount, reason).await
    }

    async fn credit(&mut self, tickets: Tickets, coins: Coins, reason: &str) -> Result<(), LedgerError> {
        self.inner.lock().await.credit(tickets, coins, reason).await
    }
}
