// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gastos::cli::{self, Settings};
use gastos::commands::expenses::select_all;
use gastos::commands::exporter::{CSV_FILE, PDF_FILE};
use gastos::db;
use gastos::shell::{MenuState, Shell};
use rusqlite::Connection;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn count(conn: &Connection) -> usize {
    select_all(conn).unwrap().len()
}

fn settings_in(dir: &Path) -> Settings {
    Settings {
        csv_path: dir.join(CSV_FILE),
        pdf_path: dir.join(PDF_FILE),
        ..Settings::default()
    }
}

fn run(conn: &Connection, settings: &Settings, input: &str) -> String {
    let mut out = Vec::new();
    Shell::new(conn, Cursor::new(input.as_bytes()), &mut out, settings)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn add_then_list() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n12.30\nFood\nlunch\n2\n6\n");

    assert!(out.contains("Despesa adicionada com sucesso."));
    assert!(out.contains("--- Lista de Despesas ---"));
    assert!(out.contains("Valor: R$12.30, Categoria: Food, Descrição: lunch"));
    assert!(out.ends_with("Saindo do aplicativo...\n"));
    assert_eq!(count(&conn), 1);
}

#[test]
fn non_numeric_amount_creates_nothing() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\ndoze reais\n6\n");

    assert!(out.contains("Erro: O valor da despesa deve ser um número."));
    assert_eq!(count(&conn), 0);
    // Back at the main menu: the next line was read as a menu choice.
    assert!(out.contains("Saindo do aplicativo..."));
    assert_eq!(out.matches("Controle de Gastos").count(), 2);
}

#[test]
fn non_numeric_id_deletes_nothing() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n5\nFood\n\n4\num\n6\n");

    assert!(out.contains("Erro: O ID deve ser um número inteiro."));
    assert_eq!(count(&conn), 1);
}

#[test]
fn remove_known_and_unknown_ids() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n5\nFood\n\n4\n1\n4\n1\n6\n");

    assert!(out.contains("Despesa com ID 1 removida com sucesso."));
    assert!(out.contains("Nenhuma despesa encontrada com ID 1."));
    assert!(select_all(&conn).unwrap().is_empty());
}

#[test]
fn invalid_option_redisplays_menu() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "9\n6\n");

    assert!(out.contains("Opção inválida. Tente novamente."));
    assert_eq!(out.matches("Escolha uma opção: ").count(), 2);
}

#[test]
fn empty_store_reports_no_records() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "2\n3\nFood\n6\n");

    assert!(out.contains("Nenhuma despesa registrada."));
    assert!(out.contains("Nenhuma despesa encontrada para a categoria 'Food'."));
    assert!(!out.contains("--- Lista de Despesas ---"));
}

#[test]
fn empty_category_is_refused() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n3\n\n\n6\n");

    assert!(out.contains("Erro: A categoria não pode ser vazia."));
    assert_eq!(count(&conn), 0);
}

#[test]
fn report_menu_exports_both_formats() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path());
    let input = "1\n10.00\nFood\n\n1\n5.50\nFood\n\n1\n20\nTransport\n\n5\n1\n2\n7\n3\n6\n";
    let out = run(&conn, &settings, input);

    assert!(out.contains("--- Relatório de Gastos por Categoria ---"));
    assert!(out.contains("Exportar Relatório"));
    assert!(out.contains("Opção inválida. Tente novamente."));
    assert!(out.ends_with("Saindo do aplicativo...\n"));

    let csv = std::fs::read_to_string(&settings.csv_path).unwrap();
    assert!(csv.lines().any(|l| l == "Food,15.50"));
    assert!(csv.lines().any(|l| l == "Transport,20.00"));
    assert!(settings.pdf_path.exists());
}

#[test]
fn export_fault_keeps_export_menu_open() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let settings = Settings {
        csv_path: dir.path().join("missing").join(CSV_FILE),
        ..settings_in(dir.path())
    };
    let out = run(&conn, &settings, "5\n1\n3\n6\n");

    assert!(out.contains("Erro ao exportar para"));
    assert_eq!(out.matches("Exportar Relatório\n").count(), 2);
    assert!(out.contains("Saindo do aplicativo..."));
}

#[test]
fn end_of_input_terminates() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path());

    let mut out = Vec::new();
    let mut shell = Shell::new(&conn, Cursor::new(&b"9\n"[..]), &mut out, &settings);
    shell.step().unwrap();
    assert_eq!(shell.state(), MenuState::Main);
    shell.step().unwrap();
    assert_eq!(shell.state(), MenuState::Terminated);
    assert_eq!(count(&conn), 0);
}

#[test]
fn cli_defaults_to_fixed_file_names() {
    let m = cli::build_cli().get_matches_from(["gastos"]);
    assert_eq!(Settings::from_matches(&m), Settings::default());
    assert_eq!(Settings::default().db_path, Path::new("expenses.db"));
    assert_eq!(Settings::default().csv_path, Path::new("relatorio_gastos.csv"));
    assert_eq!(Settings::default().pdf_path, Path::new("relatorio_gastos.pdf"));

    let m = cli::build_cli().get_matches_from(["gastos", "-v"]);
    let s = Settings::from_matches(&m);
    assert_eq!(s.db_path, Path::new("expenses.db"));
    assert!(s.verbose);

    // The backing file name is part of the on-disk contract.
    assert!(cli::build_cli()
        .try_get_matches_from(["gastos", "--db", "/tmp/x.db"])
        .is_err());
}

#[test]
fn end_of_input_mid_add_inserts_nothing() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n42\n");

    assert!(out.contains("Digite a categoria: "));
    assert!(!out.contains("Despesa adicionada"));
    assert_eq!(count(&conn), 0);
}

#[test]
fn huge_amount_is_accepted() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n1e30\nBig\n\n6\n");

    assert!(out.contains("Despesa adicionada com sucesso."));
    assert_eq!(select_all(&conn).unwrap()[0].amount, 1e30);
}

#[test]
fn out_of_range_amount_has_distinct_message() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out = run(&conn, &settings_in(dir.path()), "1\n1e400\n6\n");

    assert!(out.contains("Erro: O valor da despesa está fora do intervalo suportado."));
    assert!(!out.contains("deve ser um número."));
    assert_eq!(count(&conn), 0);
}
