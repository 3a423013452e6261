use std::fmt::Display;

use crate::{amount::format_amount, error::Overflow};

pub const DEFAULT_TERM_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Investment {
    pub amount: i64,
    pub days_left: u32,
}

impl Investment {
    /// One day of interest, truncated toward zero.
    pub fn accrue(&mut self, interest_rate: f64) -> Result<(), Overflow> {
        let interest = (self.amount as f64 * interest_rate) as i64;
        self.amount = self.amount.checked_add(interest).ok_or(Overflow)?;
        self.days_left = self.days_left.saturating_sub(1);
        Ok(())
    }

    fn is_mature(&self) -> bool {
        self.days_left == 0
    }
}

/**
 * The book of outstanding fixed-term investments.
 * Maturity is checked before accrual, so a fresh investment earns
 * interest on each of its term days and is paid out the day after.
 */
#[derive(Debug)]
pub struct Bank {
    investments: Vec<Investment>,
    interest_rate: f64,
    term_days: u32,
}

impl Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "amount,days_left")?;
        for investment in self.investments() {
            writeln!(f, "{},{}", investment.amount, investment.days_left)?;
        }
        write!(f, "outstanding: {}", format_amount(self.outstanding()))
    }
}

impl Bank {
    pub fn new(interest_rate: f64, term_days: u32) -> Self {
        Bank {
            investments: Vec::new(),
            interest_rate,
            term_days,
        }
    }

    pub fn add_investment(&mut self, amount: i64) {
        self.investments.push(Investment {
            amount,
            days_left: self.term_days,
        });
    }

    /// Pays out matured investments, then accrues a day of interest on the rest.
    pub fn withdraw_daily(&mut self) -> Result<i64, Overflow> {
        let returns = self.receive_returns()?;
        self.remove_completed();
        self.accrue_all()?;
        Ok(returns)
    }

    fn receive_returns(&self) -> Result<i64, Overflow> {
        self.investments
            .iter()
            .filter(|investment| investment.is_mature())
            .try_fold(0i64, |returns, investment| {
                returns.checked_add(investment.amount).ok_or(Overflow)
            })
    }

    fn remove_completed(&mut self) {
        self.investments.retain(|investment| !investment.is_mature());
    }

    fn accrue_all(&mut self) -> Result<(), Overflow> {
        let interest_rate = self.interest_rate;
        for investment in self.investments.iter_mut() {
            investment.accrue(interest_rate)?;
        }
        Ok(())
    }

    /// Sum of the book, pinned at `i64::MAX`. Only used for display.
    pub fn outstanding(&self) -> i64 {
        self.investments
            .iter()
            .fold(0i64, |total, investment| total.saturating_add(investment.amount))
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        Bank::new(0.05, DEFAULT_TERM_DAYS)
    }

    mod accrue {
        use super::*;

        #[test]
        fn accrue_truncates_interest() {
            let mut investment = Investment {
                amount: 1050,
                days_left: 1,
            };
            investment.accrue(0.05).unwrap();

            assert_eq!(investment.amount, 1102);
            assert_eq!(investment.days_left, 0);
        }
        #[test]
        fn accrue_small_amount_earns_nothing() {
            let mut investment = Investment {
                amount: 19,
                days_left: 2,
            };
            investment.accrue(0.05).unwrap();

            assert_eq!(investment.amount, 19);
            assert_eq!(investment.days_left, 1);
        }
        #[test]
        fn accrue_overflow_is_reported() {
            let mut investment = Investment {
                amount: i64::MAX - 10,
                days_left: 2,
            };

            assert_eq!(investment.accrue(0.05), Err(Overflow));
        }
    }

    mod withdrawals {
        use super::*;

        #[test]
        fn new_investment_pays_nothing_until_term_ends() {
            let mut bank = bank();
            bank.add_investment(1000);

            assert_eq!(bank.withdraw_daily().unwrap(), 0);
            assert_eq!(bank.withdraw_daily().unwrap(), 0);
            assert_eq!(bank.len(), 1);
        }
        #[test]
        fn matured_investment_pays_compounded_amount() {
            let mut bank = bank();
            bank.add_investment(1000);
            bank.withdraw_daily().unwrap();
            bank.withdraw_daily().unwrap();

            assert_eq!(bank.withdraw_daily().unwrap(), 1102);
            assert!(bank.is_empty());
        }
        #[test]
        fn only_matured_investments_are_removed() {
            let mut bank = bank();
            bank.add_investment(1000);
            bank.withdraw_daily().unwrap();
            bank.add_investment(2000);
            bank.withdraw_daily().unwrap();

            assert_eq!(bank.withdraw_daily().unwrap(), 1102);
            assert_eq!(
                bank.investments(),
                &[Investment {
                    amount: 2205,
                    days_left: 0
                }]
            );
        }
        #[test]
        fn zero_investment_stays_on_book() {
            let mut bank = bank();
            bank.add_investment(0);
            bank.withdraw_daily().unwrap();

            assert_eq!(bank.len(), 1);
            assert_eq!(bank.outstanding(), 0);
        }
        #[test]
        fn custom_term_and_rate() {
            let mut bank = Bank::new(0.1, 1);
            bank.add_investment(100);

            assert_eq!(bank.withdraw_daily().unwrap(), 0);
            assert_eq!(bank.withdraw_daily().unwrap(), 110);
        }
        #[test]
        fn zero_term_pays_out_next_day_without_interest() {
            let mut bank = Bank::new(0.05, 0);
            bank.add_investment(1000);

            assert_eq!(bank.withdraw_daily().unwrap(), 1000);
            assert!(bank.is_empty());
        }
        #[test]
        fn returns_overflow_is_reported() {
            let mut bank = Bank::new(0.05, 0);
            bank.add_investment(i64::MAX);
            bank.add_investment(1);

            assert_eq!(bank.withdraw_daily(), Err(Overflow));
        }
        #[test]
        fn outstanding_saturates() {
            let mut bank = bank();
            bank.add_investment(i64::MAX);
            bank.add_investment(1);

            assert_eq!(bank.outstanding(), i64::MAX);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn lists_book() {
            let mut bank = bank();
            bank.add_investment(1500);
            bank.add_investment(20);

            assert_eq!(
                bank.to_string(),
                "amount,days_left\n1500,2\n20,2\noutstanding: 1.5K"
            );
        }
    }
}
