//! Test utilities and fixtures for record parser testing
//!
//! This module provides sample uploads and helper functions used across the
//! different parser test modules.

use super::code_generator::SequentialCodeGenerator;
use super::parser::RecordParser;
use crate::config::ParserRules;

mod header_tests;

/// Parser with built-in rules and deterministic fallback codes
pub fn create_test_parser() -> RecordParser {
    RecordParser::with_code_generator(
        ParserRules::default(),
        Box::new(SequentialCodeGenerator::new()),
    )
}

/// Helper to create a complete comma-separated upload
pub fn create_test_upload() -> String {
    r#"Código,Nombre,Jefe,País,Función,Objetivo de Desarrollo,Competencia a desarrollar,Tipo Habilidad,Descripción,Fecha Inicio,Fecha Fin,Estatus,Categoría,Progreso (%)
IDP001,Juan Perez,maria LOPEZ,Perú,Desarrollador,Mejorar Skills,React Avanzado,,Curso online,01/01/2025,30/03/2025,En Progreso,Cursos,45%
IDP002,Ana Ruiz,Carlos Diaz,ecuador,QA,Automatizar,Docker y Kubernetes,,Laboratorio,01/02/2025,30/04/2025,Completado,Experiencia critica,100
IDP001,Juan Perez,Maria Lopez,PE,Desarrollador,Liderar equipo,Liderazgo situacional,,Mentoría,01/03/2025,30/06/2025,Pendiente,Mentoring,"12,5%""#
        .to_string()
}

/// Helper to create a semicolon-separated upload with a BOM and CRLF endings
pub fn create_semicolon_upload() -> String {
    "\u{FEFF}Codigo;Nombre;Jefe;Pais;Competencia;Progreso\r\n\
     IDP010;\"Perez; Juan\";LUIS GOMEZ;Costa Rica;Terraform;30,5\r\n\
     \r\n\
     IDP011;Rosa Vega;luis gomez;Republica Dominicana;Excel;n/a\r\n"
        .to_string()
}
