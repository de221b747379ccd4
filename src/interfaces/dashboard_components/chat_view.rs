use crate::domain::chat::Conversation;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::LandlordApp;
use eframe::egui;
use uuid::Uuid;

pub fn render_chat_view(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);

    ui.heading(app.i18n.t("nav_chat"));
    ui.add_space(8.0);

    let mut open_requested: Option<Uuid> = None;
    let mut send_requested = false;

    ui.horizontal_top(|ui| {
        // Conversation list
        ui.vertical(|ui| {
            ui.set_width(260.0);
            ui.add(
                egui::TextEdit::singleline(&mut app.chat_search)
                    .hint_text(app.i18n.t("search_placeholder"))
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let conversations: Vec<Conversation> = app
                .messenger
                .conversations(&app.chat_search)
                .into_iter()
                .cloned()
                .collect();

            egui::ScrollArea::vertical()
                .id_salt("conversation_scroll")
                .show(ui, |ui| {
                    for conversation in &conversations {
                        let selected = app.selected_conversation == Some(conversation.id);
                        let bg = if selected {
                            palette.bg_card_hover
                        } else {
                            palette.bg_card
                        };
                        egui::Frame::NONE
                            .fill(bg)
                            .corner_radius(8)
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.set_width(232.0);
                                let response = ui
                                    .vertical(|ui| {
                                        ui.horizontal(|ui| {
                                            ui.label(
                                                egui::RichText::new(&conversation.participant_name)
                                                    .strong()
                                                    .size(13.0)
                                                    .color(palette.text_primary),
                                            );
                                            if conversation.unread_count > 0 {
                                                ui.with_layout(
                                                    egui::Layout::right_to_left(egui::Align::Center),
                                                    |ui| {
                                                        ui.label(
                                                            egui::RichText::new(
                                                                conversation.unread_count.to_string(),
                                                            )
                                                            .size(11.0)
                                                            .strong()
                                                            .color(palette.accent),
                                                        );
                                                    },
                                                );
                                            }
                                        });
                                        if let Some(title) = &conversation.listing_title {
                                            ui.label(
                                                egui::RichText::new(title)
                                                    .size(10.0)
                                                    .color(palette.text_muted),
                                            );
                                        }
                                        ui.label(
                                            egui::RichText::new(&conversation.last_message)
                                                .size(11.0)
                                                .color(palette.text_secondary),
                                        );
                                    })
                                    .response;
                                if response.interact(egui::Sense::click()).clicked() {
                                    open_requested = Some(conversation.id);
                                }
                            });
                        ui.add_space(6.0);
                    }
                });
        });

        ui.separator();

        // Active thread
        ui.vertical(|ui| {
            match app.selected_conversation {
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(app.i18n.t("no_conversation"))
                                .italics()
                                .color(palette.text_muted),
                        );
                    });
                }
                Some(conversation_id) => {
                    let owner_id = app
                        .user
                        .as_ref()
                        .map(|u| u.id.clone())
                        .unwrap_or_default();

                    egui::ScrollArea::vertical()
                        .id_salt("thread_scroll")
                        .auto_shrink([false, true])
                        .max_height(ui.available_height() - 48.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for message in app.messenger.thread(conversation_id) {
                                let own = message.sender_id == owner_id;
                                let align = if own {
                                    egui::Layout::right_to_left(egui::Align::TOP)
                                } else {
                                    egui::Layout::left_to_right(egui::Align::TOP)
                                };
                                ui.with_layout(align, |ui| {
                                    let fill = if own { palette.accent } else { palette.bg_card };
                                    let text = if own {
                                        egui::Color32::WHITE
                                    } else {
                                        palette.text_primary
                                    };
                                    egui::Frame::NONE
                                        .fill(fill)
                                        .corner_radius(10)
                                        .inner_margin(egui::Margin::symmetric(10, 6))
                                        .show(ui, |ui| {
                                            ui.set_max_width(360.0);
                                            ui.vertical(|ui| {
                                                ui.label(
                                                    egui::RichText::new(&message.body)
                                                        .size(12.0)
                                                        .color(text),
                                                );
                                                ui.label(
                                                    egui::RichText::new(
                                                        message.sent_at.format("%H:%M").to_string(),
                                                    )
                                                    .size(9.0)
                                                    .color(text.linear_multiply(0.7)),
                                                );
                                            });
                                        });
                                });
                                ui.add_space(4.0);
                            }
                        });

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut app.chat_draft)
                                .hint_text(app.i18n.t("message_placeholder"))
                                .desired_width(ui.available_width() - 90.0),
                        );
                        let submit = ui.button(app.i18n.t("send_message")).clicked()
                            || (response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter)));
                        if submit && !app.chat_draft.trim().is_empty() {
                            send_requested = true;
                        }
                    });
                }
            }
        });
    });

    if let Some(id) = open_requested {
        app.selected_conversation = Some(id);
        app.messenger.mark_read(id);
        app.chat_draft.clear();
    }

    if send_requested
        && let Some(conversation_id) = app.selected_conversation
        && let Some(user) = app.user.clone()
    {
        app.messenger
            .send(conversation_id, &user.id, &user.name, &app.chat_draft);
        app.chat_draft.clear();
    }
}
