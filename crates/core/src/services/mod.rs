pub mod calendar_service;
pub mod live_price_service;
pub mod profit_loss_service;
pub mod summary_service;
