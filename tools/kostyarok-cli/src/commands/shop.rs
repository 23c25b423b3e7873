//! Interactive shopping session.
//!
//! Each input line is parsed into a [`ShopCommand`]; state changes go
//! through [`AppState::apply`] one at a time.

use std::io::BufRead;

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Input;
use kostyarok_commerce::catalog::CategoryFilter;
use kostyarok_commerce::checkout::PaymentField;
use kostyarok_commerce::ProductId;
use kostyarok_storefront::{Action, AppState, Notice, View};

use super::catalog::print_products;
use super::ShopArgs;
use crate::context::Context;

const HELP: &[(&str, &str)] = &[
    ("view <id>", "switch page (home, catalog, about, sellers, add, contacts)"),
    ("search [text]", "set search text; empty clears it"),
    ("category <id|all>", "choose a category"),
    ("price <min> <max>", "set the price range"),
    ("rating <min>", "set the minimum rating"),
    ("reset", "restore default filters"),
    ("add <id>", "add one unit to the cart"),
    ("remove <id>", "remove a product from the cart"),
    ("qty <id> <n>", "set a quantity; 0 or below removes"),
    ("cart", "show the cart"),
    ("checkout", "open the payment form"),
    ("close", "close the payment form"),
    ("card|holder|expiry|cvv <value>", "fill a payment field"),
    ("pay", "submit the payment"),
    ("help", "show this list"),
    ("quit", "leave the shop"),
];

/// One parsed line of the shop loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopCommand {
    Apply(Action),
    ShowCart,
    Help,
    Quit,
    Nothing,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<ShopCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let action = match word.to_lowercase().as_str() {
        "" => return Ok(ShopCommand::Nothing),
        "help" | "?" => return Ok(ShopCommand::Help),
        "quit" | "exit" | "q" => return Ok(ShopCommand::Quit),
        "cart" => return Ok(ShopCommand::ShowCart),
        "view" => Action::Navigate(one_arg(&args, "view")?.parse()?),
        "search" => Action::SetSearch(rest.to_string()),
        "category" => {
            Action::SelectCategory(one_arg(&args, "category")?.parse::<CategoryFilter>()?)
        }
        "price" => match args.as_slice() {
            [min, max] => Action::SetPriceRange {
                min: parse_number(min, "min price")?,
                max: parse_number(max, "max price")?,
            },
            _ => bail!("usage: price <min> <max>"),
        },
        "rating" => Action::SetMinRating(parse_number(one_arg(&args, "rating")?, "rating")?),
        "reset" => Action::ResetFilters,
        "add" => Action::AddToCart(product_id(&args, "add")?),
        "remove" => Action::RemoveFromCart(product_id(&args, "remove")?),
        "qty" => match args.as_slice() {
            [id, quantity] => Action::UpdateQuantity {
                id: parse_number(id, "product id")?,
                quantity: parse_number(quantity, "quantity")?,
            },
            _ => bail!("usage: qty <id> <n>"),
        },
        "checkout" => Action::OpenCheckout,
        "close" => Action::CloseCheckout,
        "card" => payment(PaymentField::CardNumber, rest),
        "holder" => payment(PaymentField::CardHolder, rest),
        "expiry" => payment(PaymentField::Expiry, rest),
        "cvv" => payment(PaymentField::Cvv, rest),
        "pay" => Action::Pay,
        other => bail!("unknown command `{}`; type `help`", other),
    };

    Ok(ShopCommand::Apply(action))
}

fn payment(field: PaymentField, value: &str) -> Action {
    Action::EditPayment {
        field,
        value: value.to_string(),
    }
}

fn one_arg<'a>(args: &[&'a str], command: &str) -> Result<&'a str> {
    match args {
        [arg] => Ok(arg),
        _ => Err(anyhow!("usage: {} <value>", command)),
    }
}

fn product_id(args: &[&str], command: &str) -> Result<ProductId> {
    parse_number(one_arg(args, command)?, "product id")
}

fn parse_number<T>(text: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse().with_context(|| format!("invalid {}: {}", what, text))
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let view: View = args.view.parse()?;
    let criteria = ctx.config.filter.to_criteria()?;
    let mut state = AppState::new().with_view(view).with_criteria(criteria);

    ctx.output.header("Костярокъ");
    ctx.output.info("Type `help` for commands.");
    show_view(&state, ctx);

    // Piped input is read line by line; stdin stays unlocked for the prompt otherwise.
    let mut piped = (!console::user_attended()).then(|| std::io::stdin().lock().lines());

    loop {
        let line = match piped.as_mut() {
            Some(lines) => match lines.next() {
                Some(line) => line?,
                None => break,
            },
            None => Input::<String>::new()
                .with_prompt(prompt(&state))
                .allow_empty(true)
                .interact_text()?,
        };

        match parse_command(&line) {
            Ok(ShopCommand::Apply(action)) => {
                let refresh = refreshes_listing(&action);
                match state.apply(action) {
                    Some(notice) => report(&notice, ctx),
                    None if refresh => show_view(&state, ctx),
                    None => show_cart(&state, ctx),
                }
            }
            Ok(ShopCommand::ShowCart) => show_cart(&state, ctx),
            Ok(ShopCommand::Help) => {
                for (usage, about) in HELP {
                    ctx.output.kv(usage, about);
                }
            }
            Ok(ShopCommand::Quit) => break,
            Ok(ShopCommand::Nothing) => {}
            Err(e) => ctx.output.warn(&format!("{:#}", e)),
        }
    }

    Ok(())
}

fn prompt(state: &AppState) -> String {
    format!("[{} | {} шт.]", state.view(), state.checkout().item_count())
}

fn refreshes_listing(action: &Action) -> bool {
    matches!(
        action,
        Action::Navigate(_)
            | Action::SetSearch(_)
            | Action::SelectCategory(_)
            | Action::SetPriceRange { .. }
            | Action::SetMinRating(_)
            | Action::ResetFilters
    )
}

fn report(notice: &Notice, ctx: &Context) {
    match notice {
        Notice::PaymentConfirmed(confirmation) => {
            if ctx.output.is_json() {
                ctx.output.json(confirmation);
            } else {
                ctx.output.success(&confirmation.message);
            }
        }
        Notice::UnknownProduct(id) => ctx.output.warn(&format!("no product with id {}", id)),
    }
}

fn show_view(state: &AppState, ctx: &Context) {
    match state.view() {
        View::Catalog => {
            let found = state.filtered_products();
            if found.is_empty() {
                ctx.output.warn("Товары не найдены");
            } else {
                ctx.output.info(&format!("Найдено товаров: {}", found.len()));
                print_products(ctx, &found);
            }
        }
        View::Home => print_products(ctx, state.catalog().popular()),
        other => ctx.output.info(&format!(
            "{}: `kostyarok render {}` prints this page",
            other.label(),
            other.id()
        )),
    }
}

fn show_cart(state: &AppState, ctx: &Context) {
    let checkout = state.checkout();
    if ctx.output.is_json() {
        ctx.output.json(&checkout.totals());
        return;
    }

    if checkout.cart().is_empty() {
        ctx.output.info("Корзина пуста");
        return;
    }

    for item in checkout.cart().items() {
        ctx.output.list_item(&format!(
            "[{}] {} x{} = {}",
            item.id,
            item.name,
            item.quantity,
            item.subtotal().display()
        ));
    }
    ctx.output.kv("Итого", &checkout.total_amount().display());
    ctx.output.kv("state", checkout.state().as_str());

    if checkout.is_checkout_open() {
        for field in PaymentField::ALL {
            let value = checkout.payment_form().get(field);
            let shown = if field.is_secret() {
                "*".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            ctx.output.kv(field.label(), &shown);
        }
    }
}
