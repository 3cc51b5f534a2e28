//! Interactive console front-end for the ER triage simulator.
//!
//! Three simulation modes — random roster, saved roster (with the
//! triage-correction protocol enabled), and a saturated day — followed by a
//! results menu over the finished run.  All simulation semantics live in the
//! `triage-*` library crates; this binary only wires input, output, and
//! seeds together.

mod report;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use triage_core::{Category, PatientId, SimConfig, SimRng, Tick};
use triage_hospital::{Hospital, Patient};
use triage_sim::{CloseReport, Sim, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const RANDOM_MODE_PATIENTS:    u32 = 144; // one arrival every 10 minutes
const SATURATED_MODE_PATIENTS: u32 = 200;
const AREA_CAPACITY:           usize = 100;
const ROSTER_FILE:             &str = "Pacientes_24h.txt";

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints every simulation event as it happens.
struct ConsoleObserver;

impl SimObserver for ConsoleObserver {
    fn on_arrival(&mut self, _tick: Tick, patient: &Patient) {
        println!("[LLEGADA] {}", patient.summary());
    }

    fn on_attention(&mut self, _tick: Tick, patient: &Patient) {
        println!("[ATENCION] {}", patient.summary());
    }

    fn on_triage_error(&mut self, _tick: Tick, patient: &Patient) {
        println!(
            "[ERROR] Paciente {} categorizado incorrectamente en {}",
            patient.full_name(),
            patient.category()
        );
    }

    fn on_correction(&mut self, _tick: Tick, patient: &Patient, _old: Category, new: Category) {
        println!(
            "[CORRECCION] Reasignada categoría del paciente {} a {}",
            patient.full_name(),
            new
        );
    }

    fn on_close(&mut self, report: &CloseReport) {
        println!(
            "\n[Cierre Del Hospital]\nPacientes Totales: {}\nPacientes Atendidos: {}\nPacientes No Atendidos: {}",
            report.total_registered, report.attended, report.unattended
        );
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    loop {
        let choice = prompt(
            "\n-| MENÚ PRINCIPAL |-\
             \n1) Iniciar simulación con lista aleatoria\
             \n2) Iniciar simulación con lista guardada\
             \n3) Iniciar simulación saturada\
             \n0) Cerrar el programa\
             \nSeleccione una opción: ",
        )?;
        match choice.as_str() {
            "1" => run_random(RANDOM_MODE_PATIENTS)?,
            "2" => run_from_file()?,
            "3" => run_random(SATURATED_MODE_PATIENTS)?,
            _ => {
                println!(">> Cerrando programa...");
                return Ok(());
            }
        }
    }
}

// ── Simulation modes ──────────────────────────────────────────────────────────

fn run_random(patients_per_day: u32) -> Result<()> {
    let config = SimConfig::new(patients_per_day, AREA_CAPACITY, rand::random());
    let interval_secs = config.arrival_interval_minutes() as u64 * 60;
    let roster = triage_roster::generate(
        patients_per_day as usize,
        interval_secs,
        &mut SimRng::new(rand::random()),
    );

    let mut sim = SimBuilder::new(config).patients(roster).build()?;
    sim.run(&mut ConsoleObserver)?;
    results_menu(&mut sim)?;
    Ok(())
}

fn run_from_file() -> Result<()> {
    println!(">> Cargando pacientes desde archivo...");
    let path = Path::new(ROSTER_FILE);
    if !path.exists() {
        println!("El archivo no existe. Creando un nuevo archivo con pacientes...");
    }
    let roster = match triage_roster::load_or_create(path, &mut SimRng::new(rand::random())) {
        Ok(roster) => roster,
        Err(e) => {
            // I/O failure aborts this mode entirely; back to the main menu.
            println!("Error al leer archivo: {e}");
            return Ok(());
        }
    };

    let config = SimConfig::new(RANDOM_MODE_PATIENTS, AREA_CAPACITY, rand::random());
    let mut sim = SimBuilder::new(config)
        .patients(roster)
        .correction(true)
        .build()?;
    sim.run(&mut ConsoleObserver)?;
    results_menu(&mut sim)?;
    Ok(())
}

// ── Results menu ──────────────────────────────────────────────────────────────

fn results_menu(sim: &mut Sim) -> Result<()> {
    loop {
        let choice = prompt(
            "\n-| MENÚ DE RESULTADOS |-\
             \n1. Ver pacientes atendidos\
             \n2. Ver pacientes no atendidos\
             \n3. Total atendidos por área\
             \n4. Total atendidos por categoría\
             \n5. Tiempos de atención por paciente\
             \n6. Promedio de espera por categoría\
             \n7. Lista de pacientes que excedieron el tiempo máximo de espera\
             \n8. Reasignar categoría de un paciente\
             \n0. Salir\
             \nSeleccione una opción: ",
        )?;
        match choice.as_str() {
            "1" => {
                for p in sim.hospital().attended() {
                    println!("{}", p.summary());
                }
            }
            "2" => {
                for p in sim.hospital().unattended() {
                    println!("{}", p.summary());
                }
            }
            "3" => {
                for (area, count) in report::attended_by_area(sim.hospital()) {
                    println!("{area}: {count}");
                }
            }
            "4" => {
                for (category, count) in report::attended_by_category(sim.hospital()) {
                    println!("{category}: {count}");
                }
            }
            "5" => {
                for p in sim.hospital().attended() {
                    if let Some(wait) = report::wait_minutes(p) {
                        println!("{} fue atendido a los {} minutos", p.full_name(), wait);
                    }
                }
            }
            "6" => {
                for (category, avg) in report::average_wait_by_category(sim.hospital()) {
                    println!("Categoría {category}: Promedio = {avg} min");
                }
            }
            "7" => {
                for (p, wait, max) in report::over_max_wait(sim.hospital()) {
                    println!(
                        "{} (Categoría {}) esperó {} min (máx: {})",
                        p.full_name(),
                        p.category(),
                        wait,
                        max
                    );
                }
            }
            "8" => reassign_prompt(sim.hospital_mut())?,
            "0" => {
                println!("\n-[Saliendo del menú...]-\n");
                return Ok(());
            }
            _ => println!("\n---[Opción inválida.]---\n"),
        }
    }
}

fn reassign_prompt(hospital: &mut Hospital) -> Result<()> {
    let raw_id = prompt("Ingrese ID del paciente: ")?;
    let Ok(id) = raw_id.parse::<PatientId>() else {
        println!("No se encontró un paciente con ese ID.");
        return Ok(());
    };
    if !hospital.contains(id) {
        println!("No se encontró un paciente con ese ID.");
        return Ok(());
    }

    let raw_category = prompt("Ingrese nueva categoría (1 a 5): ")?;
    let category = raw_category
        .parse::<u8>()
        .ok()
        .and_then(|v| Category::new(v).ok());
    match category {
        Some(new) => {
            hospital.reassign_category(id, new)?;
            println!("Categoría actualizada correctamente.");
            if let Some(p) = hospital.patient(id) {
                println!("{}", p.summary());
            }
        }
        None => println!("Categoría inválida."),
    }
    Ok(())
}

// ── Input helper ──────────────────────────────────────────────────────────────

/// Print `message`, flush, and read one trimmed line.  EOF yields an empty
/// string, which every menu treats as "exit".
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
