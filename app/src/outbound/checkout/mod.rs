//! Line-oriented checkout gateway.
//!
//! Shows the order on a writer and reads the identifiers the hosted checkout
//! reports back (payment id, order id, signature) from a reader, one per
//! line. A blank payment id, `cancel`, or end of input cancels the checkout;
//! `fail <reason>` reports a gateway failure.

use std::io::{BufRead, BufReader, Stderr, Stdin, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CheckoutCallback, CheckoutError, CheckoutGateway, CheckoutOptions};

const FAIL_KEYWORD: &str = "fail";

/// Checkout gateway driven through a reader and writer pair.
pub struct PromptCheckout<R, W> {
    io: Arc<Mutex<PromptIo<R, W>>>,
}

struct PromptIo<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> PromptCheckout<R, W> {
    /// Wrap `reader` and `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Arc::new(Mutex::new(PromptIo { reader, writer })),
        }
    }
}

/// Standard input reader that never buffers past the line it returns, so
/// several readers can take turns on the terminal.
pub fn stdin_lines() -> BufReader<Stdin> {
    BufReader::with_capacity(1, std::io::stdin())
}

impl PromptCheckout<BufReader<Stdin>, Stderr> {
    /// Prompt on standard error and read answers from standard input.
    pub fn terminal() -> Self {
        Self::new(stdin_lines(), std::io::stderr())
    }
}

#[async_trait]
impl<R, W> CheckoutGateway for PromptCheckout<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    async fn open(&self, options: &CheckoutOptions) -> Result<CheckoutCallback, CheckoutError> {
        let io = Arc::clone(&self.io);
        let options = options.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = io
                .lock()
                .map_err(|_| CheckoutError::unavailable("checkout prompt lock poisoned"))?;
            let PromptIo { reader, writer } = &mut *guard;
            run_prompt(reader, writer, &options)
        })
        .await
        .map_err(|error| CheckoutError::unavailable(error.to_string()))?
    }
}

fn run_prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &CheckoutOptions,
) -> Result<CheckoutCallback, CheckoutError> {
    show_order(writer, options).map_err(|error| CheckoutError::unavailable(error.to_string()))?;

    let payment_id = ask(reader, writer, "Payment id (blank to cancel)")?;
    if payment_id.is_empty() || payment_id.eq_ignore_ascii_case("cancel") {
        debug!(order_id = %options.order.id, "checkout cancelled at prompt");
        return Err(CheckoutError::cancelled());
    }
    if let Some(reason) = failure_reason(&payment_id) {
        return Err(CheckoutError::failed(reason));
    }

    let order_id = ask(reader, writer, &format!("Order id [{}]", options.order.id))?;
    let signature = ask(reader, writer, "Signature")?;
    Ok(CheckoutCallback {
        payment_id,
        order_id: if order_id.is_empty() {
            options.order.id.clone()
        } else {
            order_id
        },
        signature,
    })
}

fn failure_reason(answer: &str) -> Option<&str> {
    let rest = answer.strip_prefix(FAIL_KEYWORD)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest.trim())
}

fn show_order<W: Write>(writer: &mut W, options: &CheckoutOptions) -> std::io::Result<()> {
    writeln!(writer, "{} - {}", options.name, options.description)?;
    writeln!(
        writer,
        "Order {}: {} {} (minor units)",
        options.order.id, options.order.amount, options.order.currency
    )?;
    writeln!(writer, "Merchant key: {}", options.key)?;
    writer.flush()
}

fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String, CheckoutError> {
    write!(writer, "{label}: ")
        .and_then(|()| writer.flush())
        .map_err(|error| CheckoutError::unavailable(error.to_string()))?;
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|error| CheckoutError::unavailable(error.to_string()))?;
    if read == 0 {
        return Err(CheckoutError::cancelled());
    }
    Ok(line.trim().to_owned())
}
