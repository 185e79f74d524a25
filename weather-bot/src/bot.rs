use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};
use weather_core::{LookupError, OpenWeatherClient, WeatherReport, format_reply};

use crate::config::DEFAULT_CITY;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать справку")]
    Help,
    #[command(description = "узнать текущую погоду")]
    Weather,
}

const GREETING: &str = "Привет! Я бот, который может показать погоду. 🌤\n\
    Для начала используй команду /weather, чтобы узнать прогноз погоды.\n\
    Если нужна помощь, напиши /help.";

const HELP_TEXT: &str = "Я умею показывать погоду для города Москва. Используй команду:\n\
    /weather — чтобы узнать текущую погоду.";

const TRANSPORT_FAILURE_REPLY: &str =
    "Произошла ошибка при запросе к API погоды. Попробуйте позже.";

const INVALID_PAYLOAD_REPLY: &str = "Не удалось получить данные о погоде. Попробуйте позже.";

/// Persistent two-button menu attached to the greeting.
fn start_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new([[
        KeyboardButton::new("/weather"),
        KeyboardButton::new("/help"),
    ]])
    .resize_keyboard()
}

/// Map a lookup outcome to the text the user sees. Failures collapse to generic
/// messages; raw error detail only ever goes to the logs.
fn weather_reply_text(result: Result<WeatherReport, LookupError>) -> String {
    match result {
        Ok(report) => format_reply(&report),
        Err(LookupError::TransportFailure(_)) => TRANSPORT_FAILURE_REPLY.to_string(),
        Err(LookupError::InvalidPayload) => INVALID_PAYLOAD_REPLY.to_string(),
    }
}

/// Poll for updates and answer the three commands until the process is stopped.
pub async fn run(bot: Bot, client: OpenWeatherClient) -> anyhow::Result<()> {
    let client = Arc::new(client);

    Command::repl(bot, move |bot: Bot, msg: Message, cmd: Command| {
        let client = client.clone();

        async move {
            match cmd {
                Command::Start => {
                    bot.send_message(msg.chat.id, GREETING)
                        .reply_markup(start_keyboard())
                        .await?;
                }
                Command::Help => {
                    bot.send_message(msg.chat.id, HELP_TEXT).await?;
                }
                Command::Weather => {
                    info!(chat_id = msg.chat.id.0, city = DEFAULT_CITY, "weather lookup requested");

                    let result = client.fetch_weather(DEFAULT_CITY).await;
                    if let Err(err) = &result {
                        error!(chat_id = msg.chat.id.0, error = %err, "weather lookup failed");
                    }

                    bot.send_message(msg.chat.id, weather_reply_text(result))
                        .await?;
                }
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_commands_parse() {
        assert_eq!(Command::parse("/start", "testbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help", "testbot").unwrap(), Command::Help);
        assert_eq!(
            Command::parse("/weather", "testbot").unwrap(),
            Command::Weather
        );
    }

    #[test]
    fn unknown_command_does_not_parse() {
        assert!(Command::parse("/forecast", "testbot").is_err());
    }

    #[test]
    fn successful_lookup_formats_report() {
        let reply = weather_reply_text(Ok(WeatherReport {
            city: "Moscow".to_string(),
            temperature_c: 3.5,
            description: "Light rain".to_string(),
        }));

        assert!(reply.contains("Moscow"));
        assert!(reply.contains("3.5°C"));
        assert!(reply.contains("Light rain"));
    }

    #[test]
    fn transport_failure_maps_to_generic_reply() {
        let reply = weather_reply_text(Err(LookupError::TransportFailure(
            "status 500".to_string(),
        )));
        assert_eq!(reply, TRANSPORT_FAILURE_REPLY);
    }

    #[test]
    fn invalid_payload_maps_to_generic_reply() {
        let reply = weather_reply_text(Err(LookupError::InvalidPayload));
        assert_eq!(reply, INVALID_PAYLOAD_REPLY);
    }
}
