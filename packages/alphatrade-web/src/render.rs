//! HTML rendering for the dashboard page.

use alphatrade_core::{Broker, TradeSide};

/// How many of the most recent trades the dashboard shows.
const RECENT_TRADES: usize = 5;

/// Render the dashboard: balance, holdings, trade form, recent trades, and
/// an optional status message.
pub fn home_page(broker: &Broker, message: Option<&str>) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n<head><title>AlphaTrade</title></head>\n<body>\n");
    page.push_str(&format!(
        "<h1>{} - Balance: ${:.2}</h1>\n",
        escape_html(broker.name()),
        broker.cash()
    ));

    page.push_str("<h2>Portfolio:</h2>\n<ul>\n");
    for position in broker.positions() {
        page.push_str(&format!(
            "  <li>{}: {} shares @ ${:.2}</li>\n",
            escape_html(&position.symbol),
            position.shares,
            position.cost_basis
        ));
    }
    page.push_str("</ul>\n");

    page.push_str(concat!(
        "<h2>Trade:</h2>\n",
        "<form method=\"post\" action=\"/trade\">\n",
        "  Stock Symbol: <input type=\"text\" name=\"symbol\" required><br>\n",
        "  Action: <select name=\"action\">\n",
        "    <option value=\"buy\">Buy</option>\n",
        "    <option value=\"sell\">Sell</option>\n",
        "  </select><br>\n",
        "  Shares: <input type=\"number\" name=\"shares\" min=\"1\" required><br>\n",
        "  <input type=\"submit\" value=\"Submit\">\n",
        "</form>\n",
    ));

    if !broker.trades().is_empty() {
        page.push_str("<h2>Recent Trades:</h2>\n<ul>\n");
        for trade in broker.trades().iter().rev().take(RECENT_TRADES) {
            let verb = match trade.side {
                TradeSide::Buy => "Bought",
                TradeSide::Sell => "Sold",
            };
            page.push_str(&format!(
                "  <li>[{}] {} {} {} @ ${:.2}</li>\n",
                trade.executed_at.format("%H:%M:%S"),
                verb,
                trade.shares,
                escape_html(&trade.symbol),
                trade.price
            ));
        }
        page.push_str("</ul>\n");
    }

    if let Some(message) = message {
        page.push_str(&format!("<p>{}</p>\n", escape_html(message)));
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// Escape text for interpolation into HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
