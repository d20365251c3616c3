use habla_core::grammar::CommandGrammar;
use serenity::all::CreateEmbed;

pub const HELP_TITLE: &str = "Habla Translator Bot - Help";
pub const HELP_DESCRIPTION: &str =
    "A bot that translates text and messages. Powered by Google Translate!";

/// Answer for a prefixed message that matches no command
pub fn usage_hint(grammar: &CommandGrammar) -> String {
    format!(
        "Try `{} help` or `{} help`",
        grammar.prefix(),
        grammar.short_prefix()
    )
}

pub fn help_fields(grammar: &CommandGrammar) -> Vec<(&'static str, String)> {
    let long = grammar.prefix();
    let short = grammar.short_prefix();

    vec![
        ("Prefix", format!("`{short}` or `{long}`")),
        ("Get help", format!("`{short} help` or `{long} help`")),
        (
            "Translate text",
            format!("`{short} french dutch Bonjour!` _(from french to dutch)_"),
        ),
        (
            "Use '?' if you don't know the original language",
            format!(
                "`{short} ? dutch Bonjour!` _(Habla will try to detect the original language)_"
            ),
        ),
        (
            "You can even use 2 letter language codes",
            format!("`{short} fr nl Bonjour!`"),
        ),
        (
            "Translate someone else's message",
            format!(
                "Reply to the other person's message with:\n\
                 `{short}` _(Habla will detect the language and translate it to English)_\n\n\
                 Or specify the language you want to translate it to:\n\
                 `{short} french dutch` _(from french to dutch)_\n\n\
                 Or use '?' if you don't know the original language:\n\
                 `{short} ? dutch`"
            ),
        ),
    ]
}

pub fn help_embed(grammar: &CommandGrammar) -> CreateEmbed {
    help_fields(grammar)
        .into_iter()
        .fold(
            CreateEmbed::new()
                .title(HELP_TITLE)
                .description(HELP_DESCRIPTION),
            |embed, (name, value)| embed.field(name, value, false),
        )
}
