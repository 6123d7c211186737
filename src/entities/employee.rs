// 👤 Employee Entity - monthly salary arithmetic
// No bounds checking anywhere: negative percentages and salaries pass through.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: u32,

    /// Monthly salary
    salary: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, salary: f64) -> Self {
        Employee {
            name: name.into(),
            age,
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Scale salary by `percentage` percent
    pub fn give_raise(&mut self, percentage: f64) {
        self.salary += self.salary * percentage / 100.0;
        debug!(employee = %self.name, percentage, salary = self.salary, "raise");
    }

    /// Add a flat amount to the salary
    pub fn promote(&mut self, increase_amount: f64) {
        self.salary += increase_amount;
        debug!(employee = %self.name, increase_amount, salary = self.salary, "promotion");
    }

    /// Monthly salary × 12
    pub fn calculate_annual_salary(&self) -> f64 {
        self.salary * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!((expected - actual).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_calculate_annual_salary() {
        for (name, age, salary, expected) in [("John", 30, 5000.0, 60000.0), ("Jane", 25, 7000.0, 84000.0)] {
            let employee = Employee::new(name, age, salary);
            assert_close(expected, employee.calculate_annual_salary());
        }
    }

    #[test]
    fn test_annual_salary_ignores_name_and_age() {
        let young = Employee::new("A", 18, 3000.0);
        let old = Employee::new("Someone Else", 64, 3000.0);
        assert_close(young.calculate_annual_salary(), old.calculate_annual_salary());
    }

    #[test]
    fn test_annual_salary_does_not_mutate() {
        let employee = Employee::new("John", 30, 5000.0);
        employee.calculate_annual_salary();
        assert_close(5000.0, employee.salary());
    }

    #[test]
    fn test_promote() {
        for (name, age, salary, increase, expected) in
            [("John", 30, 50000.0, 5000.0, 55000.0), ("Jane", 25, 60000.0, 6000.0, 66000.0)]
        {
            let mut employee = Employee::new(name, age, salary);
            employee.promote(increase);
            assert_close(expected, employee.salary());
        }
    }

    #[test]
    fn test_give_raise() {
        let mut employee = Employee::new("John", 30, 50000.0);
        employee.give_raise(10.0);
        assert_close(55000.0, employee.salary());

        employee.give_raise(-10.0);
        assert_close(49500.0, employee.salary());
    }

    #[test]
    fn test_accessors() {
        for (name, age) in [("John", 30), ("Jane", 25)] {
            let employee = Employee::new(name, age, 50000.0);
            assert_eq!(employee.name(), name);
            assert_eq!(employee.age(), age);
        }
    }
}
