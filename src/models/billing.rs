use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 请求书状态: 已入金
pub const INVOICE_STATUS_RECEIVED: &str = "入金済み";
/// 支付状态: 已支付
pub const PAYMENT_STATUS_PAID: &str = "支払済み";

/// 请求书 (税込)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    pub total_amount: BigDecimal,
    pub status: String,
}

/// 支付记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payment {
    pub amount: BigDecimal,
    pub status: String,
    pub category: String,
}

/// 请求/支付汇总 (全部税込)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingSummary {
    pub quote_amount_incl_tax: BigDecimal,
    pub order_amount: Option<BigDecimal>,
    pub base_amount: BigDecimal,          // 注文金額优先, 否则税込見積金額
    pub total_invoiced: BigDecimal,
    pub total_received: BigDecimal,
    pub remaining_amount: BigDecimal,     // 基准金額 - 请求合计
    pub total_payments: BigDecimal,
    pub total_payments_paid: BigDecimal,
}
