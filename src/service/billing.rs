use bigdecimal::{BigDecimal, Zero};

use crate::models::{
    BillingSummary, Invoice, Payment, QuoteRecord, INVOICE_STATUS_RECEIVED, PAYMENT_STATUS_PAID,
};

/// 标准消费税率 (1.1)
pub fn standard_tax_rate() -> BigDecimal {
    BigDecimal::from(11) / BigDecimal::from(10)
}

/// 请求/支付汇总, 全部按税込金额统一
pub fn summarize(
    record: &QuoteRecord,
    invoices: &[Invoice],
    payments: &[Payment],
    tax_rate: &BigDecimal,
) -> BillingSummary {
    let quote_amount_incl_tax = floor(&(&record.total_amount * tax_rate));
    let order_amount = record
        .order_amount
        .clone()
        .filter(|amount| *amount > BigDecimal::zero());
    let base_amount = order_amount
        .clone()
        .unwrap_or_else(|| quote_amount_incl_tax.clone());

    let total_invoiced = invoices
        .iter()
        .fold(BigDecimal::zero(), |acc, inv| acc + &inv.total_amount);
    let total_received = invoices
        .iter()
        .filter(|inv| inv.status == INVOICE_STATUS_RECEIVED)
        .fold(BigDecimal::zero(), |acc, inv| acc + &inv.total_amount);
    let remaining_amount = &base_amount - &total_invoiced;

    let total_payments = payments
        .iter()
        .fold(BigDecimal::zero(), |acc, p| acc + &p.amount);
    let total_payments_paid = payments
        .iter()
        .filter(|p| p.status == PAYMENT_STATUS_PAID)
        .fold(BigDecimal::zero(), |acc, p| acc + &p.amount);

    if remaining_amount < BigDecimal::zero() {
        tracing::warn!(
            "请求合计 {} 超过基准金額 {}",
            total_invoiced,
            base_amount
        );
    }

    BillingSummary {
        quote_amount_incl_tax,
        order_amount,
        base_amount,
        total_invoiced,
        total_received,
        remaining_amount,
        total_payments,
        total_payments_paid,
    }
}

/// 向下取整到整数 (负数向负无穷)
fn floor(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if *value < BigDecimal::zero() && truncated != *value {
        truncated - BigDecimal::from(1)
    } else {
        truncated
    }
}
