use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    bank::{Bank, DEFAULT_TERM_DAYS},
    error::{LedgerError, Overflow},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub days: u32,
    pub turns_per_day: u32,
    pub interest_rate: f64,
    pub term_days: u32,
    /// Profit made per turn before the first day's growth is applied.
    pub profit_per_turn: f64,
    pub profit_growth: f64,
    /// Share of each turn's profit that gets invested.
    pub invest_portion: f64,
    /// Share of each day's returns that goes straight back into the bank.
    pub reinvest_portion: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            days: 60,
            turns_per_day: 8,
            interest_rate: 0.05,
            term_days: DEFAULT_TERM_DAYS,
            profit_per_turn: 5_000_000.0,
            profit_growth: 0.05,
            invest_portion: 0.5,
            reinvest_portion: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub day: u32,
    pub investment_profit: i64,
    pub reinvestment: i64,
    pub total_invested: i64,
    pub total_returns: i64,
}

/**
 * Drives the bank one day at a time. Day 0 only seeds the book and is
 * never reported, so iterating yields reports for days 1..days.
 * The first overflow is yielded as an error and ends the run.
 */
pub struct Simulation {
    params: Params,
    bank: Bank,
    day: u32,
    profit_per_turn: f64,
    total_invested: i64,
    total_returns: i64,
}

impl Simulation {
    pub fn new(params: Params) -> Self {
        Simulation {
            bank: Bank::new(params.interest_rate, params.term_days),
            day: 0,
            profit_per_turn: params.profit_per_turn,
            total_invested: 0,
            total_returns: 0,
            params,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    fn step(&mut self) -> Result<DailyReport, Overflow> {
        self.profit_per_turn += self.profit_per_turn * self.params.profit_growth;
        let daily_returns = self.bank.withdraw_daily()?;

        let reinvestment = (daily_returns as f64 * self.params.reinvest_portion) as i64;
        self.bank.add_investment(reinvestment);
        let investment_profit = daily_returns.checked_sub(reinvestment).ok_or(Overflow)?;
        self.total_returns = self
            .total_returns
            .checked_add(investment_profit)
            .ok_or(Overflow)?;

        for _ in 0..self.params.turns_per_day {
            let cash_to_invest = (self.profit_per_turn * self.params.invest_portion) as i64;
            self.total_invested = self
                .total_invested
                .checked_add(cash_to_invest)
                .ok_or(Overflow)?;
            self.bank.add_investment(cash_to_invest);
        }

        debug!(
            day = self.day,
            returns = daily_returns,
            book_size = self.bank.len(),
            outstanding = self.bank.outstanding(),
            "day settled"
        );

        let report = DailyReport {
            day: self.day,
            investment_profit,
            reinvestment,
            total_invested: self.total_invested,
            total_returns: self.total_returns,
        };
        self.day += 1;
        Ok(report)
    }
}

impl Iterator for Simulation {
    type Item = Result<DailyReport, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.day < self.params.days {
            let report = match self.step() {
                Ok(report) => report,
                Err(Overflow) => {
                    let day = self.day;
                    self.day = self.params.days;
                    return Some(Err(LedgerError::Overflow { day }));
                }
            };
            if report.day == 0 {
                trace!("skipping warm-up day");
                continue;
            }
            return Some(Ok(report));
        }
        None
    }
}
