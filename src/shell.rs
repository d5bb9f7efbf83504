// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive menu loop.
//!
//! The shell is a small state machine over [`MenuState`]. Each pass prints the
//! menu for the current state, reads one choice and dispatches it. Faults from
//! the store or the exporters are printed and the loop keeps going; only a
//! console I/O failure ends `run` with an error.

use crate::cli::Settings;
use crate::commands::expenses::{
    add_expense, list_expenses, list_expenses_by_category, remove_expense,
};
use crate::commands::exporter::{export_report, ExportFormat};
use crate::commands::reports::{render_report, sum_by_category};
use crate::error::{GastosError, GastosResult};
use crate::utils::{parse_amount, parse_id};
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Export,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainChoice {
    AddExpense,
    ListAll,
    ListByCategory,
    RemoveExpense,
    Report,
    Exit,
    Invalid(String),
}

impl MainChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MainChoice::AddExpense,
            "2" => MainChoice::ListAll,
            "3" => MainChoice::ListByCategory,
            "4" => MainChoice::RemoveExpense,
            "5" => MainChoice::Report,
            "6" => MainChoice::Exit,
            other => MainChoice::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportChoice {
    Csv,
    Pdf,
    Back,
    Invalid(String),
}

impl ExportChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => ExportChoice::Csv,
            "2" => ExportChoice::Pdf,
            "3" => ExportChoice::Back,
            other => ExportChoice::Invalid(other.to_string()),
        }
    }
}

const MAIN_MENU: &str = "\nControle de Gastos
1. Adicionar Despesa
2. Listar Todas as Despesas
3. Listar Despesas por Categoria
4. Remover Despesa
5. Gerar Relatório de Gastos por Categoria
6. Sair";

const EXPORT_MENU: &str = "\nExportar Relatório
1. Exportar para CSV
2. Exportar para PDF
3. Voltar ao Menu Principal";

const CHOICE_PROMPT: &str = "Escolha uma opção: ";
const INVALID_OPTION: &str = "Opção inválida. Tente novamente.";

pub struct Shell<'a, R, W> {
    conn: &'a Connection,
    input: R,
    out: W,
    csv_path: PathBuf,
    pdf_path: PathBuf,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(conn: &'a Connection, input: R, out: W, settings: &Settings) -> Self {
        Shell {
            conn,
            input,
            out,
            csv_path: settings.csv_path.clone(),
            pdf_path: settings.pdf_path.clone(),
            state: MenuState::Main,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn run(mut self) -> Result<()> {
        while self.state != MenuState::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Shows the current menu and handles a single choice.
    pub fn step(&mut self) -> Result<()> {
        match self.state {
            MenuState::Main => {
                writeln!(self.out, "{}", MAIN_MENU)?;
                let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                    return Ok(());
                };
                self.main_choice(MainChoice::parse(&line))
            }
            MenuState::Export => {
                writeln!(self.out, "{}", EXPORT_MENU)?;
                let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                    return Ok(());
                };
                self.export_choice(ExportChoice::parse(&line))
            }
            MenuState::Terminated => Ok(()),
        }
    }

    fn main_choice(&mut self, choice: MainChoice) -> Result<()> {
        match choice {
            MainChoice::AddExpense => self.add(),
            MainChoice::ListAll => {
                let listing = list_expenses(self.conn);
                self.show(listing)
            }
            MainChoice::ListByCategory => {
                let Some(category) = self.prompt("Digite a categoria: ")? else {
                    return Ok(());
                };
                let listing = list_expenses_by_category(self.conn, &category);
                self.show(listing)
            }
            MainChoice::RemoveExpense => self.remove(),
            MainChoice::Report => match sum_by_category(self.conn) {
                Ok(totals) => {
                    writeln!(self.out, "{}", render_report(&totals))?;
                    self.state = MenuState::Export;
                    Ok(())
                }
                Err(e) => self.fault(e),
            },
            MainChoice::Exit => {
                writeln!(self.out, "Saindo do aplicativo...")?;
                self.state = MenuState::Terminated;
                Ok(())
            }
            MainChoice::Invalid(_) => {
                writeln!(self.out, "{}", INVALID_OPTION)?;
                Ok(())
            }
        }
    }

    fn export_choice(&mut self, choice: ExportChoice) -> Result<()> {
        let (format, path) = match choice {
            ExportChoice::Csv => (ExportFormat::Csv, self.csv_path.clone()),
            ExportChoice::Pdf => (ExportFormat::Pdf, self.pdf_path.clone()),
            ExportChoice::Back => {
                self.state = MenuState::Main;
                return Ok(());
            }
            ExportChoice::Invalid(_) => {
                writeln!(self.out, "{}", INVALID_OPTION)?;
                return Ok(());
            }
        };
        let done = export_report(self.conn, format, &path)
            .map(|_| format!("Relatório exportado para {}.", path.display()));
        self.show(done)
    }

    fn add(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Digite o valor da despesa: R$")? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw) {
            Ok(a) => a,
            Err(e) => return self.fault(e),
        };
        let Some(category) = self.prompt("Digite a categoria: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Digite a descrição (opcional): ")? else {
            return Ok(());
        };
        let added = add_expense(self.conn, amount, &category, &description)
            .map(|_| "Despesa adicionada com sucesso.");
        self.show(added)
    }

    fn remove(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Digite o ID da despesa que deseja remover: ")? else {
            return Ok(());
        };
        match parse_id(&raw) {
            Ok(id) => {
                let outcome = remove_expense(self.conn, id);
                self.show(outcome)
            }
            Err(e) => self.fault(e),
        }
    }

    fn show<T: std::fmt::Display>(&mut self, result: GastosResult<T>) -> Result<()> {
        match result {
            Ok(v) => {
                writeln!(self.out, "{}", v)?;
                Ok(())
            }
            Err(e) => self.fault(e),
        }
    }

    fn fault(&mut self, err: GastosError) -> Result<()> {
        warn!(error = %err, state = ?self.state, "operation failed");
        writeln!(self.out, "{}", err)?;
        Ok(())
    }

    /// Reads one line, without its terminator. End of input terminates the shell.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if n == 0 {
            writeln!(self.out)?;
            self.state = MenuState::Terminated;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
