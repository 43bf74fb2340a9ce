//! Main application for the five-in-a-row GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::theme::*;
use crate::{Cell, GameController, GameMode, GamePhase, MoveResult};

/// Main five-in-a-row application
pub struct FiveInRowApp {
    game: GameController,
    board_view: BoardView,
    show_debug: bool,
    message: Option<String>,
}

impl FiveInRowApp {
    /// Wrap a controller; it may already be running if a mode was chosen up front
    pub fn new(_cc: &eframe::CreationContext<'_>, game: GameController) -> Self {
        Self {
            game,
            board_view: BoardView::default(),
            show_debug: true,
            message: None,
        }
    }

    fn start(&mut self, mode: GameMode, human: Cell) {
        if self.game.phase() != GamePhase::SelectingMode {
            self.game.reset_game();
        }
        self.message = self.game.start_game(mode, human).err().map(|e| e.to_string());
    }

    fn reset(&mut self) {
        info!("back to mode selection");
        self.game.reset_game();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvP)").clicked() {
                        self.start(GameMode::HumanVsHuman, Cell::X);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - play X)").clicked() {
                        self.start(GameMode::HumanVsAI, Cell::X);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - play O)").clicked() {
                        self.start(GameMode::HumanVsAI, Cell::O);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Back to Menu (R)").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match (self.game.mode(), self.game.human_symbol()) {
                        (Some(GameMode::HumanVsAI), Some(human)) => format!("PvE - You: {human}"),
                        (Some(GameMode::HumanVsHuman), _) => "PvP - Hotseat".to_string(),
                        _ => "Choose a mode".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("FIVE IN A ROW").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                if self.game.phase() == GamePhase::SelectingMode {
                    self.render_mode_card(ui);
                } else {
                    self.render_turn_card(ui);
                }

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.game.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Mode menu shown before a game starts
    fn render_mode_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CHOOSE A MODE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let choices = [
                ("Player vs Player", GameMode::HumanVsHuman, Cell::X),
                ("Player vs AI - play X", GameMode::HumanVsAI, Cell::X),
                ("Player vs AI - play O", GameMode::HumanVsAI, Cell::O),
            ];
            for (label, mode, human) in choices {
                let button = egui::Button::new(RichText::new(label).size(13.0).color(TEXT_PRIMARY))
                    .min_size(Vec2::new(ui.available_width(), 28.0));
                if ui.add(button).clicked() {
                    self.start(mode, human);
                }
                ui.add_space(4.0);
            }
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let current = self.game.current_player();
            let accent = match current {
                Cell::X => X_MARK,
                _ => O_MARK,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    current.symbol(),
                    egui::FontId::proportional(32.0),
                    accent,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{current} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_game_over() {
                        ("Game over - press R", TEXT_SECONDARY)
                    } else if self.game.is_human_turn() {
                        ("Your turn", STATUS_READY)
                    } else {
                        ("Waiting for AI", STATUS_WAITING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_ai_result() {
                Some(result) => Self::render_ai_result(ui, result),
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_ai_result(ui: &mut egui::Ui, result: &MoveResult) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(result.strategy.name()).size(11.0).strong().color(STATUS_READY));
                let score = result.score.map_or_else(|| "-".to_string(), |s| s.to_string());
                ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(format!("{} evaluated", result.evaluated)).size(10.0).color(TEXT_MUTED));
                });
            });
        });
        ui.add_space(4.0);
        ui.label(RichText::new(format!("-> {}", result.pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Cell) {
        let headline = match self.game.mode() {
            Some(GameMode::HumanVsAI) if self.game.ai_symbol() == Some(winner) => "AI WINS!".to_string(),
            Some(GameMode::HumanVsAI) => "YOU WIN!".to_string(),
            _ => format!("{winner} WINS!"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new("by five in a row").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("Back to Menu").size(14.0).strong()).clicked() {
                        self.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepting = self.game.phase() == GamePhase::Running && self.game.is_human_turn();

            let clicked = ScrollArea::both()
                .show(ui, |ui| {
                    self.board_view.show(
                        ui,
                        self.game.board(),
                        self.game.last_move(),
                        self.game.winning_line(),
                        accepting,
                    )
                })
                .inner;

            if let Some(pos) = clicked {
                self.message = match self.game.apply_human_move(pos.x as i32, pos.y as i32) {
                    Ok(_) => None,
                    Err(err) => Some(err.to_string()),
                };
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, reset) = ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::R)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if reset {
            self.reset();
        }
    }
}

impl eframe::App for FiveInRowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
