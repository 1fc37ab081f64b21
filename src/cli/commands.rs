use crate::{
    cli::{
        context::{CommandResult, ShellContext},
        output,
        registry::{CommandEntry, CommandRegistry},
        render,
    },
    errors::{CommandError, ValidationError},
    ledger::{Budget, TransactionFilter, TransactionId, TransactionKind},
    utils::build_info,
};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense",
            "add <income|expense> <amount> <category> <description...>",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Delete a transaction by id",
            "remove <id>",
            cmd_remove,
        )
        .with_aliases(&["rm", "delete"]),
        CommandEntry::new(
            "list",
            "List transactions, optionally filtered",
            "list [category|all] [income|expense|all]",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "categories",
            "List categories in use",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "summary",
            "Show totals, top category, and budget progress",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Show spending by category",
            "chart",
            cmd_chart,
        ),
        CommandEntry::new(
            "budget",
            "Show or set the spending budget (0 clears it)",
            "budget [amount]",
            cmd_budget,
        ),
        CommandEntry::new(
            "config",
            "Show or change display preferences",
            "config [show|set <locale|currency|progress_width> <value>]",
            cmd_config,
        ),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in definitions() {
        registry.register(entry);
    }
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 4 {
        return Err(context.usage_error("add"));
    }
    let kind: TransactionKind = args[0].parse()?;
    let amount = parse_amount(args[1])?;
    let category = args[2];
    let description = args[3..].join(" ");

    let txn = context
        .session_mut()
        .add(&description, amount, category, kind)?;
    let money = context.money();
    output::success(format!("Added {}", render::transaction_line(&txn, &money)));
    warn_if_over_budget(context);
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(context.usage_error("remove"));
    };
    let id: TransactionId = raw
        .trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a transaction id")))?;

    match context.session_mut().remove(id)? {
        Some(txn) => {
            let money = context.money();
            output::success(format!("Removed {}", render::transaction_line(&txn, &money)));
        }
        None => output::warning(format!("No transaction with id {id}.")),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 2 {
        return Err(context.usage_error("list"));
    }
    let filter = TransactionFilter::parse(args.first().copied(), args.get(1).copied())?;
    let money = context.money();
    let ledger = context.session().ledger();
    let matches = ledger.filter(&filter);

    output::section("Transactions");
    if matches.is_empty() {
        output::info("No transactions.");
        return Ok(());
    }
    for txn in matches {
        output::info(render::transaction_line(txn, &money));
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let categories = context.session().ledger().categories();
    output::section("Categories");
    if categories.is_empty() {
        output::info("No categories yet.");
    }
    for category in categories {
        output::info(category);
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let money = context.money();
    let summary = context.session().summary();
    output::section("Summary");
    for line in render::summary_lines(&summary, &money, context.progress_width()) {
        output::info(line);
    }
    if let Some(warning) = render::budget_warning(&summary, &money) {
        output::warning(warning);
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let money = context.money();
    let summary = context.session().summary();
    output::section("Spending by category");
    if summary.breakdown.is_empty() {
        output::info("No expenses yet.");
        return Ok(());
    }
    for row in render::chart_rows(&summary, &money, context.progress_width()) {
        output::info(row);
    }
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let money = context.money();
    match args {
        [] => {
            let budget = context.session().ledger().budget();
            if budget.is_set() {
                output::info(format!("Budget: {}", money.format(budget.limit())));
            } else {
                output::info("No budget set.");
            }
        }
        [raw] => {
            let budget: Budget = raw.parse()?;
            context.session_mut().set_budget(budget.limit())?;
            if budget.is_set() {
                output::success(format!("Budget set to {}.", money.format(budget.limit())));
            } else {
                output::success("Budget cleared.");
            }
            warn_if_over_budget(context);
        }
        _ => return Err(context.usage_error("budget")),
    }
    Ok(())
}

fn warn_if_over_budget(context: &ShellContext) {
    let summary = context.session().summary();
    if let Some(warning) = render::budget_warning(&summary, &context.money()) {
        output::warning(warning);
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                output::info(entry.description);
                output::info(format!("usage: {}", entry.usage));
                if !entry.aliases.is_empty() {
                    output::info(format!("aliases: {}", entry.aliases.join(", ")));
                }
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    let width = context
        .registry()
        .names()
        .map(str::len)
        .max()
        .unwrap_or(0);
    for entry in context.registry().list() {
        output::info(format!("  {:<width$}  {}", entry.name, entry.description));
    }
    output::hint("Use `help <command>` for details.");
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Spend Tracker {}", meta.version));
    for (label, value) in meta.rows() {
        output::info(format!("{:<12} {}", label, value));
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            let config = context.config();
            output::section("Configuration");
            output::info(format!("{:<15} {}", "locale", config.locale));
            output::info(format!("{:<15} {}", "currency", config.currency));
            output::info(format!("{:<15} {}", "progress_width", config.progress_width));
            if let Some(path) = context.config_path() {
                output::hint(format!("Saved in {}", path.display()));
            }
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            context.set_config_value(key, &value.join(" "))?;
            output::success(format!("Set {} to {}.", key, value.join(" ")));
            Ok(())
        }
        _ => Err(context.usage_error("config")),
    }
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Goodbye.");
    Err(CommandError::ExitRequested)
}
