//! Terraform sample corpus.
//!
//! Plain input data for building highlighting test cases: one snippet per
//! major syntax construct, the keyword list used by keyword verification and
//! the token types a Terraform mode is expected to emit.

use crate::types::{Summary, TokenType};

/// A named code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Sample name.
    pub name: &'static str,
    /// Terraform source.
    pub code: &'static str,
}

/// Token types a Terraform highlighter is expected to produce.
pub const EXPECTED_TOKEN_TYPES: [TokenType; 9] = [
    TokenType::Keyword,
    TokenType::String,
    TokenType::Comment,
    TokenType::Number,
    TokenType::Operator,
    TokenType::Punctuation,
    TokenType::Property,
    TokenType::Variable,
    TokenType::Bool,
];

/// Words that should be highlighted as keywords.
pub const TERRAFORM_KEYWORDS: [&str; 30] = [
    "resource",
    "variable",
    "output",
    "module",
    "data",
    "locals",
    "terraform",
    "provider",
    "required_version",
    "required_providers",
    "source",
    "version",
    "default",
    "description",
    "type",
    "string",
    "number",
    "bool",
    "list",
    "map",
    "object",
    "set",
    "tuple",
    "any",
    "for_each",
    "count",
    "depends_on",
    "lifecycle",
    "provisioner",
    "connection",
];

/// Every Terraform sample, in catalog order.
pub static TERRAFORM_SAMPLES: [Sample; 12] = [
    Sample {
        name: "basicResource",
        code: r#"resource "aws_instance" "example" {
  ami           = "ami-0c55b159cbfafe1f0"
  instance_type = "t2.micro"

  tags = {
    Name = "ExampleInstance"
  }
}"#,
    },
    Sample {
        name: "variables",
        code: r#"variable "region" {
  description = "AWS region"
  type        = string
  default     = "us-west-2"
}

variable "instance_count" {
  description = "Number of instances"
  type        = number
  default     = 3
}"#,
    },
    Sample {
        name: "outputs",
        code: r#"output "instance_ip" {
  description = "The public IP of the instance"
  value       = aws_instance.example.public_ip
}"#,
    },
    Sample {
        name: "modules",
        code: r#"module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "3.0.0"

  name = "my-vpc"
  cidr = "10.0.0.0/16"
}"#,
    },
    Sample {
        name: "dataSources",
        code: r#"data "aws_ami" "ubuntu" {
  most_recent = true

  filter {
    name   = "name"
    values = ["ubuntu/images/hcl-*"]
  }
}"#,
    },
    Sample {
        name: "locals",
        code: r#"locals {
  common_tags = {
    Environment = "production"
    Project     = "example"
  }

  instance_count = 5
}"#,
    },
    Sample {
        name: "terraformBlock",
        code: r#"terraform {
  required_version = ">= 1.0"

  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 4.0"
    }
  }
}"#,
    },
    Sample {
        name: "provider",
        code: r#"provider "aws" {
  region = var.region

  default_tags {
    tags = local.common_tags
  }
}"#,
    },
    Sample {
        name: "comments",
        code: r#"# This is a single-line comment
resource "aws_instance" "example" {
  # Another comment
  ami = "ami-12345678"

  /*
   * This is a multi-line comment
   * spanning multiple lines
   */
  instance_type = "t2.micro"
}"#,
    },
    Sample {
        name: "numbersAndOperators",
        code: r#"locals {
  count = 10
  price = 99.99
  total = count * price

  is_production = true
  is_enabled    = false

  result = 5 + 3 - 2 * 4 / 2
}"#,
    },
    Sample {
        name: "complexNested",
        code: r#"resource "aws_security_group" "example" {
  name        = "example-sg"
  description = "Example security group"

  ingress {
    from_port   = 443
    to_port     = 443
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = merge(
    local.common_tags,
    {
      Name = "example-sg"
    }
  )
}"#,
    },
    Sample {
        name: "stringInterpolation",
        code: r#"resource "aws_instance" "example" {
  ami           = data.aws_ami.ubuntu.id
  instance_type = var.instance_type

  tags = {
    Name = "${var.project_name}-instance-${var.environment}"
  }

  user_data = <<-EOF
    #!/bin/bash
    echo "Hello, World!"
    apt-get update
  EOF
}"#,
    },
];

/// Look up a sample by name.
pub fn sample(name: &str) -> Option<&'static str> {
    TERRAFORM_SAMPLES
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.code)
}

/// Iterate over every sample.
pub fn samples() -> impl Iterator<Item = &'static Sample> {
    TERRAFORM_SAMPLES.iter()
}

/// Sample names, in catalog order.
pub fn sample_names() -> Vec<&'static str> {
    samples().map(|s| s.name).collect()
}

/// Expected token types that a summary never saw, in canonical order.
pub fn missing_expected_types(summary: &Summary) -> Vec<TokenType> {
    EXPECTED_TOKEN_TYPES
        .into_iter()
        .filter(|ty| summary.count(*ty) == 0)
        .collect()
}
