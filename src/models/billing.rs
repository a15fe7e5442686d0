use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub id: String,
    pub description: String,
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutData {
    pub guest_name: String,
    pub room_number: String,
    pub room_type: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub bill_items: Vec<BillItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub deposit_paid: f64,
    pub balance_due: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LateCheckout {
    #[default]
    Standard,
    OnePm,
    ThreePm,
    SixPm,
}

impl LateCheckout {
    pub fn from_value(value: &str) -> Self {
        match value {
            "1pm" => LateCheckout::OnePm,
            "3pm" => LateCheckout::ThreePm,
            "6pm" => LateCheckout::SixPm,
            _ => LateCheckout::Standard,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            LateCheckout::Standard => "standard",
            LateCheckout::OnePm => "1pm",
            LateCheckout::ThreePm => "3pm",
            LateCheckout::SixPm => "6pm",
        }
    }

    pub fn fee(&self) -> Option<f64> {
        match self {
            LateCheckout::Standard => None,
            LateCheckout::OnePm => Some(20.0),
            LateCheckout::ThreePm => Some(40.0),
            LateCheckout::SixPm => Some(60.0),
        }
    }
}

impl CheckoutData {
    /// Mock bill data. A real deployment fetches this from the billing API.
    pub fn mock() -> Self {
        Self {
            guest_name: "John Doe".to_string(),
            room_number: "301".to_string(),
            room_type: "Deluxe King".to_string(),
            check_in_date: "May 5, 2025".to_string(),
            check_out_date: "May 9, 2025".to_string(),
            bill_items: vec![
                bill_item("1", "Room Charge - Deluxe King", "May 5, 2025", 199.00),
                bill_item("2", "Room Charge - Deluxe King", "May 6, 2025", 199.00),
                bill_item("3", "Room Charge - Deluxe King", "May 7, 2025", 199.00),
                bill_item("4", "Room Charge - Deluxe King", "May 8, 2025", 199.00),
                bill_item("5", "Room Service - Dinner", "May 6, 2025", 45.00),
                bill_item("6", "Mini Bar", "May 7, 2025", 18.50),
            ],
            subtotal: 859.50,
            tax_rate: 0.12,
            tax_amount: 103.14,
            total: 962.64,
            deposit_paid: 200.00,
            balance_due: 762.64,
        }
    }

    /// Add the late-checkout fee line and recompute the dependent amounts.
    /// The order matters: fee line first, then subtotal, then tax from the
    /// new subtotal, then total, then balance due.
    pub fn apply_late_checkout(&mut self, option: LateCheckout) {
        let Some(fee) = option.fee() else {
            return;
        };

        self.bill_items.push(BillItem {
            id: (self.bill_items.len() + 1).to_string(),
            description: format!("Late Checkout ({})", option.value()),
            date: self.check_out_date.clone(),
            amount: fee,
        });
        self.subtotal += fee;
        self.tax_amount = self.subtotal * self.tax_rate;
        self.total = self.subtotal + self.tax_amount;
        self.balance_due = self.total - self.deposit_paid;
    }
}

fn bill_item(id: &str, description: &str, date: &str, amount: f64) -> BillItem {
    BillItem {
        id: id.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        amount,
    }
}

/// Round to cents for display and assertions.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pm_late_checkout_recomputes_the_bill() {
        let mut data = CheckoutData::mock();
        data.apply_late_checkout(LateCheckout::OnePm);

        assert_eq!(round2(data.subtotal), 879.50);
        assert_eq!(round2(data.tax_amount), 105.54);
        assert_eq!(round2(data.total), 985.04);
        assert_eq!(round2(data.balance_due), 785.04);

        let last = data.bill_items.last().unwrap();
        assert_eq!(last.description, "Late Checkout (1pm)");
        assert_eq!(last.amount, 20.0);
        assert_eq!(last.date, "May 9, 2025");
    }

    #[test]
    fn standard_checkout_leaves_the_bill_untouched() {
        let mut data = CheckoutData::mock();
        let before = data.clone();
        data.apply_late_checkout(LateCheckout::Standard);
        assert_eq!(data, before);
    }

    #[test]
    fn six_pm_fee_is_sixty() {
        let mut data = CheckoutData::mock();
        data.apply_late_checkout(LateCheckout::SixPm);
        assert_eq!(round2(data.subtotal), 919.50);
        assert_eq!(data.bill_items.last().unwrap().amount, 60.0);
    }
}
